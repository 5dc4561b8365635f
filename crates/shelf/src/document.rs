//! The bibliography document printed for a work, and the pipeline that builds it.

use log::{error, info, trace, warn};
use serde::Serialize;

use crate::{
    api::{open_library::OpenLibrary, Client},
    sort::SortOrder,
    Error, ErrorKind,
};

/// Value used in place of an empty ISBN list.
pub const ISBN_NOT_FOUND: &str = "ISBN not found";

/// A book found by searching the works of an author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title of the book.
    pub title: String,
    /// The year the book was first published, `0` when unknown.
    pub first_publish_year: i32,
    /// All known ISBNs of the book's editions.
    pub isbn: Vec<String>,
    /// The number of editions of the book.
    pub edition_count: u32,
}

impl Book {
    /// Replaces an empty ISBN list with [`ISBN_NOT_FOUND`].
    pub fn fill_missing_isbn(&mut self) {
        if self.isbn.is_empty() {
            self.isbn.push(ISBN_NOT_FOUND.to_owned());
        }
    }
}

/// The author of an [`AuthorEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Display name of the author.
    pub author_name: String,
}

/// An author together with their books.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorEntry {
    /// The author the books belong to.
    pub author: Author,
    /// Books of the author ordered by first publish year.
    pub books: Vec<Book>,
}

/// All the authors of a work and their books.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// One entry per resolved author.
    pub docs: Vec<AuthorEntry>,
}

impl Document {
    /// Names of the authors in document order.
    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|d| d.author.author_name.as_str())
    }

    /// Renders the document as YAML.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`ErrorKind::Serialize`] is returned when the document cannot be
    /// serialized.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::wrap(ErrorKind::Serialize, e).context("cannot render document as YAML")
        })
    }
}

/// What to do when the name or books of a single author cannot be resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the error and leave the author out of the document.
    #[default]
    Skip,
    /// Stop building the document and return the error.
    Abort,
}

impl FailurePolicy {
    fn handle(self, err: Error) -> Result<(), Error> {
        match self {
            Self::Skip => {
                error!("{err}");
                Ok(())
            }
            Self::Abort => Err(err),
        }
    }
}

pub(crate) fn build_document<C: Client>(
    api: &OpenLibrary<C>,
    work_id: &str,
    order: SortOrder,
    policy: FailurePolicy,
) -> Result<Document, Error> {
    let keys = api.author_keys(work_id)?;

    // (name, key) pairs so each name keeps the key it was resolved from.
    let mut authors: Vec<(String, String)> = Vec::with_capacity(keys.len());
    for key in keys {
        match api.author_name(&key) {
            Ok(name) => {
                if authors.iter().any(|(n, _)| *n == name) {
                    warn!("More than one author of work '{work_id}' is named '{name}'");
                }
                authors.push((name, key));
            }
            Err(e) => policy.handle(e)?,
        }
    }

    order.sort_by(&mut authors, |(a, _), (b, _)| a.cmp(b));
    trace!("Author order: {:?}", authors.iter().map(|(n, _)| n).collect::<Vec<_>>());

    let mut document = Document::default();
    for (author_name, key) in authors {
        let mut books = match api.books_by_author(&key, order) {
            Ok(books) => books,
            Err(e) => {
                policy.handle(e.context(format!("cannot get books of author '{author_name}'")))?;
                continue;
            }
        };
        books.iter_mut().for_each(Book::fill_missing_isbn);

        document.docs.push(AuthorEntry {
            author: Author { author_name },
            books,
        });
    }

    info!("Document built with {} author(s)", document.docs.len());
    Ok(document)
}
