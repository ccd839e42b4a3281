//! ORCID and DOI recognition
//!
//! Search input is routed on whether it is a bare ORCID iD; everything else
//! is treated as a name query.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Four groups of four digits, the last one allowing the X check character
    static ref ORCID_REGEX: Regex = Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[0-9X]$").unwrap();

    static ref ORCID_URL_PREFIX: Regex = Regex::new(r"(?i)^https?://orcid\.org/").unwrap();

    static ref DOI_PREFIX: Regex = Regex::new(r"(?i)^https?://(?:dx\.)?doi\.org/|^doi:\s*").unwrap();
}

/// Returns true when `text` is exactly an ORCID iD (`NNNN-NNNN-NNNN-NNN[0-9X]`).
pub fn is_orcid(text: &str) -> bool {
    ORCID_REGEX.is_match(text)
}

/// Strip an `https://orcid.org/` prefix and surrounding whitespace.
pub fn normalize_orcid(orcid: &str) -> String {
    ORCID_URL_PREFIX.replace(orcid.trim(), "").into_owned()
}

/// Strip resolver URL or `doi:` prefixes and lowercase the DOI.
///
/// `"https://doi.org/10.1000/XYZ"` becomes `"10.1000/xyz"`.
pub fn normalize_doi(doi: &str) -> String {
    DOI_PREFIX.replace(doi.trim(), "").to_lowercase()
}

/// What a search box submission resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Direct lookup of a single iD
    Orcid(String),
    /// Free-text author name search
    Name(String),
}

impl SearchQuery {
    /// Classify raw search input. Whitespace-only input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let term = input.trim();
        if term.is_empty() {
            None
        } else if is_orcid(term) {
            Some(SearchQuery::Orcid(term.to_string()))
        } else {
            Some(SearchQuery::Name(term.to_string()))
        }
    }

    pub fn term(&self) -> &str {
        match self {
            SearchQuery::Orcid(term) | SearchQuery::Name(term) => term,
        }
    }
}
