//! Navigation targets referenced by the pages.

use url::form_urlencoded;

use crate::types::SocietyId;

/// A client-side route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/societies`
    Societies,
    /// `/societies/:id`
    Society(SocietyId),
    /// `/search?query=`
    Search(String),
    /// `/account`
    Account,
}

impl Route {
    /// Render the route as a path, percent-encoding the search query.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Societies => "/societies".to_string(),
            Self::Society(id) => format!("/societies/{id}"),
            Self::Search(query) => {
                let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
                format!("/search?query={encoded}")
            }
            Self::Account => "/account".to_string(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
