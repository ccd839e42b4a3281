//! Runs screen requests on the tokio runtime
//!
//! The render loop stays synchronous. Each request is spawned onto the
//! runtime and its response comes back over a channel that the loop drains
//! between frames.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use abrao_core::api::ProfileApi;
use abrao_core::state::{Request, Response};

pub struct Dispatcher {
    api: Arc<dyn ProfileApi>,
    handle: Handle,
    responses: UnboundedSender<Response>,
}

impl Dispatcher {
    pub fn new(
        api: Arc<dyn ProfileApi>,
        handle: Handle,
        responses: UnboundedSender<Response>,
    ) -> Self {
        Self {
            api,
            handle,
            responses,
        }
    }

    /// Execute `request` in the background.
    pub fn dispatch(&self, request: Request) {
        let api = Arc::clone(&self.api);
        let responses = self.responses.clone();
        tracing::debug!(kind = ?request.ticket().kind(), "dispatching request");
        self.handle.spawn(async move {
            let response = request.execute(api.as_ref()).await;
            if responses.send(response).is_err() {
                tracing::debug!("response dropped, UI has exited");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abrao_core::error::ApiError;
    use abrao_core::model::{
        AuthOutcome, AuthorHit, AuthorName, Credentials, Metrics, Profile, PublicationDetail,
        Registration, Work, YearSeries,
    };
    use abrao_core::state::HomeState;
    use async_trait::async_trait;

    struct FixedApi;

    #[async_trait]
    impl ProfileApi for FixedApi {
        async fn author_name(&self, _orcid: &str) -> Result<AuthorName, ApiError> {
            Ok(AuthorName {
                full_name: "Josiah Carberry".to_string(),
            })
        }

        async fn search_by_name(
            &self,
            query: &str,
            _max: u32,
        ) -> Result<Vec<AuthorHit>, ApiError> {
            Ok(vec![AuthorHit {
                orcid: "0000-0001-0000-0000".to_string(),
                full_name: query.to_string(),
            }])
        }

        async fn profile(&self, _orcid: &str) -> Result<Profile, ApiError> {
            Ok(Profile::default())
        }

        async fn metrics(&self, _orcid: &str) -> Result<Metrics, ApiError> {
            Ok(Metrics::default())
        }

        async fn stats(&self, _orcid: &str) -> Result<YearSeries, ApiError> {
            Ok(YearSeries::default())
        }

        async fn works_by_citations(
            &self,
            _orcid: &str,
            _keyword: Option<&str>,
        ) -> Result<Vec<Work>, ApiError> {
            Ok(Vec::new())
        }

        async fn works_by_keyword(
            &self,
            _orcid: &str,
            _keyword: &str,
        ) -> Result<Vec<Work>, ApiError> {
            Ok(Vec::new())
        }

        async fn publication(&self, _doi: &str) -> Result<PublicationDetail, ApiError> {
            Err(ApiError::Status {
                status: 404,
                detail: None,
            })
        }

        async fn export_xml(&self, _orcid: &str) -> Result<Vec<u8>, ApiError> {
            Ok(Vec::new())
        }

        async fn sign_in(&self, _credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
            Err(ApiError::Network("offline".to_string()))
        }

        async fn sign_up(&self, _registration: &Registration) -> Result<AuthOutcome, ApiError> {
            Err(ApiError::Network("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_response() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(Arc::new(FixedApi), Handle::current(), tx);

        let mut home = HomeState::default();
        home.set_query("Carberry");
        dispatcher.dispatch(home.submit().unwrap());

        let response = rx.recv().await.unwrap();
        assert!(home.apply(response));
        assert_eq!(home.results[0].full_name, "Carberry");
    }
}
