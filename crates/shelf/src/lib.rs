#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # shelf
//!
//! shelf resolves the authors of an OpenLibrary work and collects the bibliography of each
//! author into a [`Document`] that can be rendered as YAML.
//!
//! Every step is sequential and blocking. An author whose name or books cannot be fetched is
//! reported and left out of the document unless [`FailurePolicy::Abort`] is used.

mod api;
pub mod document;
mod error;
pub mod sort;

pub use api::endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use document::{Document, FailurePolicy};
pub use error::{Error, ErrorKind};
pub use sort::SortOrder;

use api::open_library::OpenLibrary;
use log::trace;

/// A validated request for the bibliography of a work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    work_id: String,
    order: SortOrder,
}

impl Query {
    /// Validates the raw `work_id` and `sort` values given by a user.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`ErrorKind::InvalidInput`] is returned when `work_id` is empty or `sort`
    /// is not one of `""`, `"asc"` or `"desc"`.
    pub fn new(work_id: &str, sort: &str) -> Result<Self, Error> {
        let work_id = work_id.trim();
        if work_id.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "a book key is required, e.g. OL27448W",
            ));
        }

        Ok(Self {
            work_id: work_id.to_owned(),
            order: sort.parse()?,
        })
    }

    /// The OpenLibrary work identifier.
    #[must_use]
    pub fn work_id(&self) -> &str {
        &self.work_id
    }

    /// The order used for author names and book publish years.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }
}

/// Build the bibliography [`Document`] of the authors of a work.
///
/// # Errors
///
/// An [`Err`] is returned when the authors of the work cannot be looked up.
/// An [`Err`] is returned for the first author that fails to resolve when `policy` is
/// [`FailurePolicy::Abort`].
#[inline]
pub fn bibliography_by_work(
    query: &Query,
    endpoints: Endpoints,
    policy: FailurePolicy,
) -> Result<Document, Error> {
    trace!(
        "Bibliography of work '{}' sorted {} from {}",
        query.work_id,
        query.order,
        endpoints.base_url()
    );
    let api = OpenLibrary::new(api::http_client()?, endpoints);
    document::build_document(&api, &query.work_id, query.order, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_work_id() {
        let err = Query::new("  ", "asc").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }

    #[test]
    fn query_rejects_unknown_sort() {
        let err = Query::new("OL27448W", "upward").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }

    #[test]
    fn query_without_sort_is_unspecified() {
        let query = Query::new("OL27448W", "").unwrap();
        assert_eq!("OL27448W", query.work_id());
        assert_eq!(SortOrder::Unspecified, query.order());
    }
}
