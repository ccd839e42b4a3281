//! reqwest-backed `ProfileApi`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Endpoints, ProfileApi};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{
    AuthOutcome, AuthReply, AuthorHit, AuthorName, Credentials, Metrics, Profile,
    PublicationDetail, Registration, Work, YearSeries,
};

/// `filter_by_citations` envelope
#[derive(Debug, Deserialize)]
struct CitationRanking {
    #[serde(default)]
    works_sorted_by_citations: Vec<Work>,
}

/// `filter_by_keyword` envelope
#[derive(Debug, Deserialize)]
struct KeywordWorks {
    #[serde(default)]
    works: Vec<Work>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

pub struct HttpProfileApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpProfileApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url)?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get(&self, url: Url) -> Result<Response, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.get(url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_auth<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<AuthOutcome, ApiError> {
        tracing::debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        // Error replies from proxies may not be JSON; the status still decides
        let reply: AuthReply = match serde_json::from_str(&text) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(status, "undecodable auth reply: {}", e);
                AuthReply::default()
            }
        };
        Ok(AuthOutcome::from_reply(status, reply))
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.detail)
        .map(|d| match d {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
    tracing::warn!(status = status.as_u16(), detail = ?detail, "backend returned error");

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn author_name(&self, orcid: &str) -> Result<AuthorName, ApiError> {
        self.get_json(self.endpoints.author_name(orcid)?).await
    }

    async fn search_by_name(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<AuthorHit>, ApiError> {
        self.get_json(self.endpoints.search_by_name(query, max_results)?)
            .await
    }

    async fn profile(&self, orcid: &str) -> Result<Profile, ApiError> {
        self.get_json(self.endpoints.profile(orcid)?).await
    }

    async fn metrics(&self, orcid: &str) -> Result<Metrics, ApiError> {
        self.get_json(self.endpoints.metrics(orcid)?).await
    }

    async fn stats(&self, orcid: &str) -> Result<YearSeries, ApiError> {
        self.get_json(self.endpoints.stats(orcid)?).await
    }

    async fn works_by_citations(
        &self,
        orcid: &str,
        keyword: Option<&str>,
    ) -> Result<Vec<Work>, ApiError> {
        let ranking: CitationRanking = self
            .get_json(self.endpoints.works_by_citations(orcid, keyword)?)
            .await?;
        Ok(ranking.works_sorted_by_citations)
    }

    async fn works_by_keyword(&self, orcid: &str, keyword: &str) -> Result<Vec<Work>, ApiError> {
        let filtered: KeywordWorks = self
            .get_json(self.endpoints.works_by_keyword(orcid, keyword)?)
            .await?;
        Ok(filtered.works)
    }

    async fn publication(&self, doi: &str) -> Result<PublicationDetail, ApiError> {
        self.get_json(self.endpoints.publication(doi)?).await
    }

    async fn export_xml(&self, orcid: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.get(self.endpoints.export_xml(orcid)?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
        self.post_auth(self.endpoints.sign_in()?, credentials).await
    }

    async fn sign_up(&self, registration: &Registration) -> Result<AuthOutcome, ApiError> {
        self.post_auth(self.endpoints.sign_up()?, registration).await
    }
}
