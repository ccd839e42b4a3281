//! URL construction for every backend route

use url::Url;

use crate::error::ApiError;

/// Builds request URLs against a fixed backend base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `base_url` may carry a path prefix; trailing slashes are ignored.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = base_url.trim().trim_end_matches('/').to_string();
        // Validate once so later joins only fail on bad segments
        Url::parse(&base)?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let path: String = segments
            .iter()
            .map(|segment| format!("/{}", urlencoding::encode(segment)))
            .collect();
        let mut url = Url::parse(&format!("{}{}", self.base, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// `GET /orcid/{id}/name`
    pub fn author_name(&self, orcid: &str) -> Result<Url, ApiError> {
        self.url(&["orcid", orcid, "name"], &[])
    }

    /// `GET /orcid/search/name?query=&max_results=`
    pub fn search_by_name(&self, query: &str, max_results: u32) -> Result<Url, ApiError> {
        let max = max_results.to_string();
        self.url(
            &["orcid", "search", "name"],
            &[("query", query), ("max_results", &max)],
        )
    }

    /// `GET /orcid/{id}/all`
    pub fn profile(&self, orcid: &str) -> Result<Url, ApiError> {
        self.url(&["orcid", orcid, "all"], &[])
    }

    /// `GET /orcid/{id}/metrics`
    pub fn metrics(&self, orcid: &str) -> Result<Url, ApiError> {
        self.url(&["orcid", orcid, "metrics"], &[])
    }

    /// `GET /orcid/{id}/stats`
    pub fn stats(&self, orcid: &str) -> Result<Url, ApiError> {
        self.url(&["orcid", orcid, "stats"], &[])
    }

    /// `GET /orcid/{id}/works/filter_by_citations[?keyword=]`
    pub fn works_by_citations(&self, orcid: &str, keyword: Option<&str>) -> Result<Url, ApiError> {
        let query: Vec<(&str, &str)> = keyword.map(|k| ("keyword", k)).into_iter().collect();
        self.url(&["orcid", orcid, "works", "filter_by_citations"], &query)
    }

    /// `GET /orcid/{id}/works/filter_by_keyword?keyword=`
    pub fn works_by_keyword(&self, orcid: &str, keyword: &str) -> Result<Url, ApiError> {
        self.url(
            &["orcid", orcid, "works", "filter_by_keyword"],
            &[("keyword", keyword)],
        )
    }

    /// `GET /works/publication/{doi}`. The DOI's own slashes stay path
    /// separators, which the backend's `{doi:path}` route expects.
    pub fn publication(&self, doi: &str) -> Result<Url, ApiError> {
        let mut segments = vec!["works", "publication"];
        segments.extend(doi.split('/').filter(|s| !s.is_empty()));
        self.url(&segments, &[])
    }

    /// `GET /orcid/{id}/export/xml`
    pub fn export_xml(&self, orcid: &str) -> Result<Url, ApiError> {
        self.url(&["orcid", orcid, "export", "xml"], &[])
    }

    /// `POST /signin`
    pub fn sign_in(&self) -> Result<Url, ApiError> {
        self.url(&["signin"], &[])
    }

    /// `POST /signup`
    pub fn sign_up(&self) -> Result<Url, ApiError> {
        self.url(&["signup"], &[])
    }
}
