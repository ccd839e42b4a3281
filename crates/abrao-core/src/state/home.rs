//! Home screen: researcher search

use crate::identifiers::SearchQuery;
use crate::model::AuthorHit;

use super::request::{Request, RequestKind, RequestTracker, Response};
use super::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Done,
    Failed(String),
}

#[derive(Debug)]
pub struct HomeState {
    pub query: String,
    pub results: Vec<AuthorHit>,
    pub status: SearchStatus,
    pub selected: usize,
    pub sidebar_open: bool,
    max_results: u32,
    tracker: RequestTracker,
}

impl HomeState {
    pub fn new(max_results: u32) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            status: SearchStatus::Idle,
            selected: 0,
            sidebar_open: false,
            max_results,
            tracker: RequestTracker::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for the current query, superseding any in flight.
    ///
    /// An ORCID iD becomes a single-identifier lookup, anything else a name
    /// search. Blank input clears the list and issues nothing.
    pub fn submit(&mut self) -> Option<Request> {
        self.results.clear();
        self.selected = 0;
        let Some(query) = SearchQuery::parse(&self.query) else {
            self.status = SearchStatus::Idle;
            self.tracker.invalidate(RequestKind::Search);
            return None;
        };
        self.status = SearchStatus::Loading;
        tracing::debug!(?query, "searching");
        Some(Request::Search {
            ticket: self.tracker.issue(RequestKind::Search),
            query,
            max_results: self.max_results,
        })
    }

    pub fn apply(&mut self, response: Response) -> bool {
        let Response::Search { ticket, result } = response else {
            return false;
        };
        if !self.tracker.accept(ticket) {
            return false;
        }
        match result {
            Ok(mut hits) => {
                hits.truncate(self.max_results as usize);
                self.results = hits;
                self.status = SearchStatus::Done;
            }
            Err(e) => {
                tracing::warn!("search failed: {}", e);
                self.results.clear();
                self.status = SearchStatus::Failed(e.to_string());
            }
        }
        self.selected = 0;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_hit(&self) -> Option<&AuthorHit> {
        self.results.get(self.selected)
    }

    /// Route to the selected researcher's dashboard.
    pub fn open_selected(&self) -> Option<Route> {
        self.selected_hit().map(|hit| Route::dashboard(hit.orcid.clone()))
    }

    /// Inline message shown under the search box, if any.
    pub fn notice(&self) -> Option<String> {
        match &self.status {
            SearchStatus::Loading => Some("Carregando...".to_string()),
            SearchStatus::Failed(e) => Some(format!("Falha na busca: {}", e)),
            SearchStatus::Done if self.results.is_empty() && !self.query.trim().is_empty() => {
                Some("Nenhum resultado encontrado".to_string())
            }
            _ => None,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new(10)
    }
}
