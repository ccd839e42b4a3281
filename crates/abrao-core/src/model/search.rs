use serde::{Deserialize, Serialize};

/// One entry of the search suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorHit {
    pub orcid: String,
    #[serde(default)]
    pub full_name: String,
}

/// Body of `GET /orcid/{id}/name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    #[serde(default)]
    pub full_name: String,
}
