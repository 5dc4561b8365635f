use log::{info, trace};
use serde::{Deserialize, Deserializer};

use crate::{document::Book, sort::SortOrder, Error};

use super::{endpoints::Endpoints, Client};

const WORK_PREFIX: &str = "/works/";
const AUTHOR_PREFIX: &str = "/authors/";

/// Blocking access to the OpenLibrary work, author and search endpoints.
pub struct OpenLibrary<C: Client> {
    client: C,
    endpoints: Endpoints,
}

impl<C: Client> OpenLibrary<C> {
    /// Creates an API handle making requests with `client` against `endpoints`.
    pub const fn new(client: C, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Author keys of the work `work_id`, without the `/authors/` prefix.
    pub fn author_keys(&self, work_id: &str) -> Result<Vec<String>, Error> {
        let work_id = work_id.strip_prefix(WORK_PREFIX).unwrap_or(work_id);
        info!("Looking up the authors of work '{work_id}'");

        let WorkModel { authors } = self
            .client
            .get_json(&self.endpoints.work_url(work_id))
            .map_err(|e| e.context(format!("cannot look up work '{work_id}'")))?;

        let keys: Vec<String> = authors
            .into_iter()
            .map(|AuthorRole { author }| strip_author_prefix(&author.key).to_owned())
            .collect();
        trace!("Work '{work_id}' has author keys {keys:?}");
        Ok(keys)
    }

    /// The display name of the author `author_key`.
    pub fn author_name(&self, author_key: &str) -> Result<String, Error> {
        let author_key = strip_author_prefix(author_key);
        trace!("Looking up the name of author '{author_key}'");

        self.client
            .get_json(&self.endpoints.author_url(author_key))
            .map(|AuthorModel { name }| name)
            .map_err(|e| e.context(format!("cannot look up author '{author_key}'")))
    }

    /// Books written by `author_key` sorted by their first publish year.
    ///
    /// Nothing is returned on failure, there are no partial results.
    pub fn books_by_author(&self, author_key: &str, order: SortOrder) -> Result<Vec<Book>, Error> {
        let author_key = strip_author_prefix(author_key);
        info!("Searching books of author '{author_key}'");

        let SearchModel { docs } = self
            .client
            .get_json(&self.endpoints.search_url(author_key))
            .map_err(|e| e.context(format!("cannot search books of author '{author_key}'")))?;

        let mut books: Vec<Book> = docs.into_iter().map(Book::from).collect();
        order.sort_by(&mut books, |a, b| a.first_publish_year.cmp(&b.first_publish_year));
        trace!("Found {} books for author '{author_key}'", books.len());
        Ok(books)
    }
}

fn strip_author_prefix(key: &str) -> &str {
    key.strip_prefix(AUTHOR_PREFIX).unwrap_or(key)
}

/// Deserializes an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct WorkModel {
    #[serde(default, deserialize_with = "null_as_default")]
    authors: Vec<AuthorRole>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct AuthorRole {
    author: AuthorRef,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct AuthorRef {
    key: String,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct AuthorModel {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    #[serde(default, deserialize_with = "null_as_default")]
    docs: Vec<SearchDoc>,
}

/// A single document of the search response. `author_name` is requested but only the
/// [`Book`] fields are kept.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchDoc {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    first_publish_year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    isbn: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    edition_count: u32,
}

impl From<SearchDoc> for Book {
    fn from(doc: SearchDoc) -> Self {
        let SearchDoc {
            title,
            first_publish_year,
            isbn,
            edition_count,
        } = doc;
        Self {
            title,
            first_publish_year,
            isbn,
            edition_count,
        }
    }
}
