//! Screen state flows: actions produce requests, requests run against an
//! API, responses are applied back.

mod common;

use abrao_core::api::{HttpProfileApi, ProfileApi};
use abrao_core::config::{ApiConfig, UiConfig};
use abrao_core::error::ApiError;
use abrao_core::filter::SortOrder;
use abrao_core::model::{
    AuthOutcome, AuthorHit, AuthorName, Credentials, Metrics, Profile, PublicationDetail,
    Registration, Work, YearSeries,
};
use abrao_core::state::{
    AuthField, AuthForm, AuthMode, AuthStatus, DashboardState, DashboardView, HomeState, Request,
    Route, Tab,
};
use abrao_core::SearchQuery;
use async_trait::async_trait;
use common::backend::{self, BROKEN_ORCID, KNOWN_EMAIL, KNOWN_ORCID, KNOWN_PASSWORD};
use common::fixtures::load_typed;

/// Fixture-backed API that never touches the network.
struct MockApi;

#[async_trait]
impl ProfileApi for MockApi {
    async fn author_name(&self, _orcid: &str) -> Result<AuthorName, ApiError> {
        Ok(AuthorName {
            full_name: "Josiah Carberry".to_string(),
        })
    }

    async fn search_by_name(&self, query: &str, _max: u32) -> Result<Vec<AuthorHit>, ApiError> {
        Ok(vec![AuthorHit {
            orcid: "0000-0001-0000-0000".to_string(),
            full_name: format!("{} (match)", query),
        }])
    }

    async fn profile(&self, _orcid: &str) -> Result<Profile, ApiError> {
        Ok(load_typed("profile.json"))
    }

    async fn metrics(&self, _orcid: &str) -> Result<Metrics, ApiError> {
        Ok(load_typed("metrics.json"))
    }

    async fn stats(&self, _orcid: &str) -> Result<YearSeries, ApiError> {
        Ok(load_typed("stats.json"))
    }

    async fn works_by_citations(
        &self,
        _orcid: &str,
        _keyword: Option<&str>,
    ) -> Result<Vec<Work>, ApiError> {
        Ok(Vec::new())
    }

    async fn works_by_keyword(&self, _orcid: &str, keyword: &str) -> Result<Vec<Work>, ApiError> {
        Ok(vec![Work::new(
            format!("About {}", keyword),
            abrao_core::PublicationYear::Known(2021),
        )])
    }

    async fn publication(&self, _doi: &str) -> Result<PublicationDetail, ApiError> {
        Ok(load_typed("publication.json"))
    }

    async fn export_xml(&self, _orcid: &str) -> Result<Vec<u8>, ApiError> {
        Ok(b"<record/>".to_vec())
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
        Err(ApiError::Network("offline".to_string()))
    }

    async fn sign_up(&self, _registration: &Registration) -> Result<AuthOutcome, ApiError> {
        Err(ApiError::Network("offline".to_string()))
    }
}

async fn http_api() -> HttpProfileApi {
    let config = ApiConfig {
        base_url: backend::spawn().await,
        ..Default::default()
    };
    HttpProfileApi::new(&config).unwrap()
}

/// Run every request and apply its response to the dashboard.
async fn run_all(state: &mut DashboardState, api: &dyn ProfileApi, requests: Vec<Request>) {
    for request in requests {
        let response = request.execute(api).await;
        assert!(state.apply(response), "response was dropped");
    }
}

// === Home ===

#[tokio::test]
async fn test_orcid_query_yields_single_result() {
    let api = http_api().await;
    let mut home = HomeState::new(10);
    home.set_query("0000-0002-1825-0097");

    let request = home.submit().unwrap();
    assert!(matches!(
        &request,
        Request::Search { query: SearchQuery::Orcid(_), .. }
    ));
    home.apply(request.execute(&api).await);

    assert_eq!(
        home.results,
        vec![AuthorHit {
            orcid: "0000-0002-1825-0097".to_string(),
            full_name: "Josiah Carberry".to_string(),
        }]
    );
    assert_eq!(
        home.open_selected(),
        Some(Route::dashboard("0000-0002-1825-0097"))
    );
}

#[tokio::test]
async fn test_name_query_is_capped() {
    let api = http_api().await;
    let mut home = HomeState::new(10);
    home.set_query("Smith");

    let request = home.submit().unwrap();
    let response = request.execute(&api).await;
    match &response {
        abrao_core::Response::Search { result: Ok(hits), .. } => {
            assert_eq!(hits.len(), 10);
        }
        other => panic!("unexpected response: {:?}", other),
    }
    home.apply(response);
    assert!(home.results.len() <= 10);
    assert!(home.results.iter().all(|hit| !hit.orcid.is_empty()));
}

#[tokio::test]
async fn test_unknown_orcid_reports_failure() {
    let api = http_api().await;
    let mut home = HomeState::default();
    home.set_query("0000-0000-0000-0001");
    let request = home.submit().unwrap();
    home.apply(request.execute(&api).await);
    assert_eq!(home.notice().as_deref(), Some("Falha na busca: Status 404"));
}

#[tokio::test]
async fn test_out_of_order_search_responses() {
    let api = MockApi;
    let mut home = HomeState::default();

    home.set_query("Carb");
    let slow = home.submit().unwrap();
    home.set_query("Carberry");
    let fast = home.submit().unwrap();

    let fast_response = fast.execute(&api).await;
    let slow_response = slow.execute(&api).await;
    assert!(home.apply(fast_response));
    assert!(!home.apply(slow_response));

    assert_eq!(home.results[0].full_name, "Carberry (match)");
}

// === Dashboard ===

#[tokio::test]
async fn test_dashboard_flow_over_http() {
    let api = http_api().await;
    let mut state = DashboardState::new(KNOWN_ORCID, &UiConfig::default());

    let mount = state.mount();
    run_all(&mut state, &api, vec![mount]).await;
    match state.view() {
        DashboardView::Ready(profile) => assert_eq!(profile.display_name(), "Josiah Carberry"),
        other => panic!("unexpected view: {:?}", other),
    }

    // Year filter matches works whether the year arrived as text or number
    state.set_year_filter("2020");
    assert_eq!(state.displayed_works().len(), 2);
    state.set_year_filter("");

    let requests = state.select_keyword("cracked pots");
    assert_eq!(state.tab, Tab::Publications);
    run_all(&mut state, &api, requests).await;
    let titles: Vec<String> = state.displayed_works().into_iter().map(|w| w.title).collect();
    assert_eq!(titles, vec!["Works on cracked pots"]);

    // The active keyword narrows the server ranking too
    let ranking = state.set_sort(SortOrder::MostCited).into_iter().collect();
    run_all(&mut state, &api, ranking).await;
    let titles: Vec<String> = state.displayed_works().into_iter().map(|w| w.title).collect();
    assert_eq!(titles, vec!["The Psychoceramics of Cracked Pots"]);

    let requests = state.set_tab(Tab::Metrics);
    run_all(&mut state, &api, requests).await;
    assert_eq!(state.metrics.loaded().unwrap().total_publications, 4);
    assert_eq!(state.stats.loaded().unwrap().years.len(), 2);
}

#[tokio::test]
async fn test_dashboard_profile_failure_shows_only_error() {
    let api = http_api().await;
    let mut state = DashboardState::new(BROKEN_ORCID, &UiConfig::default());
    let mount = state.mount();
    run_all(&mut state, &api, vec![mount]).await;
    assert_eq!(state.view(), DashboardView::Failed("Status 500"));
    assert!(state.displayed_works().is_empty());
}

#[tokio::test]
async fn test_work_modal_over_http() {
    let api = http_api().await;
    let mut state = DashboardState::new(KNOWN_ORCID, &UiConfig::default());
    let mount = state.mount();
    run_all(&mut state, &api, vec![mount]).await;

    // Newest first: the 2020 DOI'd paper leads the list
    let request = state.open_selected_work().unwrap();
    run_all(&mut state, &api, vec![request]).await;
    let modal = state.modal.as_ref().unwrap();
    assert_eq!(modal.work.title, "The Psychoceramics of Cracked Pots");
    assert!(modal.detail().is_none(), "unknown DOI falls back to summary");

    state.close_modal();
    state.set_title_filter("silly string");
    let request = state.open_selected_work().unwrap();
    run_all(&mut state, &api, vec![request]).await;
    let detail = state.modal.as_ref().unwrap().detail().unwrap();
    assert_eq!(detail.container.as_deref(), Some("Journal of Psychoceramics"));
}

#[tokio::test]
async fn test_export_writes_file() {
    let api = MockApi;
    let dir = tempfile::tempdir().unwrap();
    let mut state = DashboardState::new(KNOWN_ORCID, &UiConfig::default());

    let request = state.export(dir.path().to_path_buf());
    run_all(&mut state, &api, vec![request]).await;

    let path = dir.path().join(format!("{}.xml", KNOWN_ORCID));
    assert_eq!(std::fs::read(&path).unwrap(), b"<record/>");
    assert_eq!(
        state.notice,
        Some(format!("Exportado para {}", path.display()))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_into_unwritable_directory_fails() {
    let api = MockApi;
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the export directory should be
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();
    let mut state = DashboardState::new(KNOWN_ORCID, &UiConfig::default());

    let request = state.export(blocker.clone());
    run_all(&mut state, &api, vec![request]).await;

    assert_eq!(state.notice, None);
    match state.view() {
        DashboardView::Failed(error) => assert!(error.starts_with("Export error:"), "{}", error),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_keyword_then_clear_with_mock() {
    let api = MockApi;
    let mut state = DashboardState::new(KNOWN_ORCID, &UiConfig::default());
    let mount = state.mount();
    run_all(&mut state, &api, vec![mount]).await;

    let requests = state.select_keyword("psychoceramics");
    run_all(&mut state, &api, requests).await;
    assert_eq!(state.displayed_works()[0].title, "About psychoceramics");

    state.clear_keyword();
    assert_eq!(state.displayed_works().len(), 4);
}

// === Cadastro ===

#[tokio::test]
async fn test_sign_in_over_http() {
    let api = http_api().await;
    let mut form = AuthForm::new(AuthMode::SignIn);
    form.set_field(AuthField::Email, KNOWN_EMAIL);
    form.set_field(AuthField::Password, KNOWN_PASSWORD);

    let request = form.submit().unwrap();
    assert!(form.apply(request.execute(&api).await));
    assert_eq!(
        form.status,
        AuthStatus::Succeeded("Bem-vindo, Josiah Carberry!".to_string())
    );
    assert_eq!(form.take_user().unwrap().email, KNOWN_EMAIL);
}

#[tokio::test]
async fn test_sign_up_conflict_over_http() {
    let api = http_api().await;
    let mut form = AuthForm::new(AuthMode::SignUp);
    form.set_field(AuthField::Name, "Josiah Carberry");
    form.set_field(AuthField::Email, KNOWN_EMAIL);
    form.set_field(AuthField::Password, "another");

    let request = form.submit().unwrap();
    form.apply(request.execute(&api).await);
    assert_eq!(form.status, AuthStatus::Failed("Email já cadastrado".to_string()));
}

#[tokio::test]
async fn test_sign_in_network_error() {
    let api = MockApi;
    let mut form = AuthForm::new(AuthMode::SignIn);
    form.set_field(AuthField::Email, KNOWN_EMAIL);
    form.set_field(AuthField::Password, KNOWN_PASSWORD);
    let request = form.submit().unwrap();
    form.apply(request.execute(&api).await);
    assert_eq!(form.status, AuthStatus::Failed("Erro: offline".to_string()));
}
