/// Base URL of the public OpenLibrary API.
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

const SEARCH_FIELDS: &str = "author_name,title,first_publish_year,isbn,edition_count";

/// The OpenLibrary endpoints used to resolve a work into its authors and their books.
///
/// Only the base URL is configurable so a mock server can stand in for the real API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    /// Creates endpoints relative to `base_url`, a trailing `/` is ignored.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The base URL all requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn work_url(&self, work_id: &str) -> String {
        format!("{}/works/{work_id}.json", self.base_url)
    }

    pub(crate) fn author_url(&self, author_id: &str) -> String {
        format!("{}/authors/{author_id}.json", self.base_url)
    }

    pub(crate) fn search_url(&self, author_id: &str) -> String {
        format!(
            "{}/search.json?author_key={author_id}&fields={SEARCH_FIELDS}",
            self.base_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_match_open_library() {
        let endpoints = Endpoints::default();

        assert_eq!(
            "https://openlibrary.org/works/OL27448W.json",
            endpoints.work_url("OL27448W")
        );
        assert_eq!(
            "https://openlibrary.org/authors/OL26320A.json",
            endpoints.author_url("OL26320A")
        );
        assert_eq!(
            "https://openlibrary.org/search.json?author_key=OL26320A&fields=author_name,title,first_publish_year,isbn,edition_count",
            endpoints.search_url("OL26320A")
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let endpoints = Endpoints::new("http://localhost:8080//");

        assert_eq!("http://localhost:8080", endpoints.base_url());
        assert_eq!(
            "http://localhost:8080/works/OL1W.json",
            endpoints.work_url("OL1W")
        );
    }
}
