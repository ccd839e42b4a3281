//! Backend API client
//!
//! `ProfileApi` is the seam between view state and the network: screens
//! produce requests, something implementing this trait answers them.

mod endpoints;
mod http;

pub use endpoints::Endpoints;
pub use http::HttpProfileApi;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{
    AuthOutcome, AuthorHit, AuthorName, Credentials, Metrics, Profile, PublicationDetail,
    Registration, Work, YearSeries,
};

/// One async call per backend route.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET /orcid/{id}/name`
    async fn author_name(&self, orcid: &str) -> Result<AuthorName, ApiError>;

    /// `GET /orcid/search/name`
    async fn search_by_name(&self, query: &str, max_results: u32)
        -> Result<Vec<AuthorHit>, ApiError>;

    /// `GET /orcid/{id}/all`
    async fn profile(&self, orcid: &str) -> Result<Profile, ApiError>;

    /// `GET /orcid/{id}/metrics`
    async fn metrics(&self, orcid: &str) -> Result<Metrics, ApiError>;

    /// `GET /orcid/{id}/stats`
    async fn stats(&self, orcid: &str) -> Result<YearSeries, ApiError>;

    /// `GET /orcid/{id}/works/filter_by_citations`, most cited first
    async fn works_by_citations(
        &self,
        orcid: &str,
        keyword: Option<&str>,
    ) -> Result<Vec<Work>, ApiError>;

    /// `GET /orcid/{id}/works/filter_by_keyword`
    async fn works_by_keyword(&self, orcid: &str, keyword: &str) -> Result<Vec<Work>, ApiError>;

    /// `GET /works/publication/{doi}`
    async fn publication(&self, doi: &str) -> Result<PublicationDetail, ApiError>;

    /// `GET /orcid/{id}/export/xml`, raw document bytes
    async fn export_xml(&self, orcid: &str) -> Result<Vec<u8>, ApiError>;

    /// `POST /signin`. Rejections the backend explains are `Ok(Rejected)`.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthOutcome, ApiError>;

    /// `POST /signup`
    async fn sign_up(&self, registration: &Registration) -> Result<AuthOutcome, ApiError>;
}
