//! Profile dashboard state
//!
//! Holds everything the dashboard screen shows for one researcher: the
//! profile document, the work list controls (keyword, title and year
//! filters, sort order), the metrics panel payloads and the work detail
//! popup. User actions return the `Request`s to run; results come back
//! through `apply`.

use std::path::PathBuf;

use crate::config::UiConfig;
use crate::filter::{available_years, sort_by_year_desc, SortOrder, WorkFilter};
use crate::identifiers::normalize_doi;
use crate::model::{Metrics, Profile, PublicationDetail, Work, YearSeries};

use super::load::Load;
use super::request::{Request, RequestKind, RequestTracker, Response};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Biography,
    Publications,
    Metrics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Biography, Tab::Publications, Tab::Metrics];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Biography => "Biografia",
            Tab::Publications => "Publicações",
            Tab::Metrics => "Métricas",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Biography => 0,
            Tab::Publications => 1,
            Tab::Metrics => 2,
        }
    }

    pub fn next(&self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// The work detail popup.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkModal {
    /// Summary record from the list, shown until (or instead of) the detail
    pub work: Work,
    pub detail: Load<PublicationDetail>,
}

impl WorkModal {
    /// The detailed record, when it arrived.
    pub fn detail(&self) -> Option<&PublicationDetail> {
        self.detail.loaded()
    }

    pub fn is_loading(&self) -> bool {
        self.detail.is_loading()
    }
}

/// What the dashboard body renders.
#[derive(Debug, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    /// Page-level failure; nothing else is shown
    Failed(&'a str),
    Ready(&'a Profile),
}

#[derive(Debug)]
pub struct DashboardState {
    pub author_id: String,
    pub profile: Load<Profile>,
    pub filter: WorkFilter,
    pub sort: SortOrder,
    pub tab: Tab,
    pub sidebar_open: bool,
    pub dark_mode: bool,
    /// Keyword the work list is narrowed to
    pub keyword: Option<String>,
    pub keyword_works: Load<Vec<Work>>,
    /// Server citation ranking, used while sorting by most cited
    pub ranked_works: Load<Vec<Work>>,
    pub metrics: Load<Metrics>,
    pub stats: Load<YearSeries>,
    pub modal: Option<WorkModal>,
    /// Transient message such as the export result
    pub notice: Option<String>,
    pub selected_work: usize,
    pub keyword_cursor: usize,
    page_error: Option<String>,
    tracker: RequestTracker,
}

impl DashboardState {
    pub fn new(author_id: impl Into<String>, ui: &UiConfig) -> Self {
        Self {
            author_id: author_id.into(),
            profile: Load::Idle,
            filter: WorkFilter::default(),
            sort: SortOrder::default(),
            tab: Tab::default(),
            sidebar_open: ui.sidebar_open,
            dark_mode: ui.dark_mode,
            keyword: None,
            keyword_works: Load::Idle,
            ranked_works: Load::Idle,
            metrics: Load::Idle,
            stats: Load::Idle,
            modal: None,
            notice: None,
            selected_work: 0,
            keyword_cursor: 0,
            page_error: None,
            tracker: RequestTracker::new(),
        }
    }

    /// Fetch the profile document for this researcher.
    pub fn mount(&mut self) -> Request {
        tracing::info!(author_id = %self.author_id, "loading profile");
        self.profile = Load::Loading;
        Request::Profile {
            ticket: self.tracker.issue(RequestKind::Profile),
            orcid: self.author_id.clone(),
        }
    }

    /// Drop every payload and the page error, then mount again. View flags
    /// (tab, sort, sidebar, theme) are kept.
    pub fn reload(&mut self) -> Vec<Request> {
        self.tracker = RequestTracker::new();
        self.page_error = None;
        self.notice = None;
        self.modal = None;
        self.keyword = None;
        self.keyword_works = Load::Idle;
        self.ranked_works = Load::Idle;
        self.metrics = Load::Idle;
        self.stats = Load::Idle;
        self.selected_work = 0;

        let mut requests = vec![self.mount()];
        if self.sort == SortOrder::MostCited {
            requests.push(self.fetch_ranking());
        }
        if self.tab == Tab::Metrics {
            requests.extend(self.fetch_metrics());
        }
        requests
    }

    pub fn view(&self) -> DashboardView<'_> {
        if let Some(error) = &self.page_error {
            return DashboardView::Failed(error);
        }
        match &self.profile {
            Load::Loaded(profile) => DashboardView::Ready(profile),
            Load::Failed(error) => DashboardView::Failed(error),
            Load::Idle | Load::Loading => DashboardView::Loading,
        }
    }

    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    /// Switch tabs. The metrics panel fetches its data the first time it
    /// is shown.
    pub fn set_tab(&mut self, tab: Tab) -> Vec<Request> {
        self.tab = tab;
        if tab == Tab::Metrics && self.metrics.is_idle() {
            self.fetch_metrics()
        } else {
            Vec::new()
        }
    }

    pub fn next_tab(&mut self) -> Vec<Request> {
        self.set_tab(self.tab.next())
    }

    pub fn prev_tab(&mut self) -> Vec<Request> {
        self.set_tab(self.tab.prev())
    }

    fn fetch_metrics(&mut self) -> Vec<Request> {
        self.metrics = Load::Loading;
        self.stats = Load::Loading;
        vec![
            Request::Stats {
                ticket: self.tracker.issue(RequestKind::Stats),
                orcid: self.author_id.clone(),
            },
            Request::Metrics {
                ticket: self.tracker.issue(RequestKind::Metrics),
                orcid: self.author_id.clone(),
            },
        ]
    }

    fn fetch_ranking(&mut self) -> Request {
        self.ranked_works = Load::Loading;
        Request::CitationWorks {
            ticket: self.tracker.issue(RequestKind::CitationWorks),
            orcid: self.author_id.clone(),
            keyword: self.keyword.clone(),
        }
    }

    /// Narrow the work list to `keyword` and jump to the publications tab.
    pub fn select_keyword(&mut self, keyword: impl Into<String>) -> Vec<Request> {
        let keyword = keyword.into();
        tracing::debug!(%keyword, "filtering by keyword");
        self.keyword = Some(keyword.clone());
        self.tab = Tab::Publications;
        self.selected_work = 0;
        self.keyword_works = Load::Loading;

        let mut requests = vec![Request::KeywordWorks {
            ticket: self.tracker.issue(RequestKind::KeywordWorks),
            orcid: self.author_id.clone(),
            keyword,
        }];
        if self.sort == SortOrder::MostCited {
            requests.push(self.fetch_ranking());
        }
        requests
    }

    /// Select the keyword under the sidebar cursor.
    pub fn select_keyword_at_cursor(&mut self) -> Vec<Request> {
        let keyword = self
            .profile
            .loaded()
            .and_then(|p| p.keywords.get(self.keyword_cursor))
            .cloned();
        match keyword {
            Some(keyword) => self.select_keyword(keyword),
            None => Vec::new(),
        }
    }

    pub fn keyword_cursor_next(&mut self) {
        let count = self.profile.loaded().map_or(0, |p| p.keywords.len());
        if count > 0 {
            self.keyword_cursor = (self.keyword_cursor + 1) % count;
        }
    }

    /// Back to the profile's own work list.
    pub fn clear_keyword(&mut self) -> Vec<Request> {
        if self.keyword.take().is_none() {
            return Vec::new();
        }
        self.keyword_works = Load::Idle;
        self.tracker.invalidate(RequestKind::KeywordWorks);
        self.selected_work = 0;
        if self.sort == SortOrder::MostCited {
            vec![self.fetch_ranking()]
        } else {
            Vec::new()
        }
    }

    /// `MostCited` asks the server for its ranking; `Recent` drops it and
    /// sorts locally.
    pub fn set_sort(&mut self, sort: SortOrder) -> Option<Request> {
        self.sort = sort;
        self.selected_work = 0;
        match sort {
            SortOrder::MostCited => Some(self.fetch_ranking()),
            SortOrder::Recent => {
                self.ranked_works = Load::Idle;
                self.tracker.invalidate(RequestKind::CitationWorks);
                None
            }
        }
    }

    pub fn toggle_sort(&mut self) -> Option<Request> {
        self.set_sort(self.sort.toggled())
    }

    pub fn set_title_filter(&mut self, title: impl Into<String>) {
        self.filter.title = title.into();
        self.selected_work = 0;
    }

    pub fn set_year_filter(&mut self, year: impl Into<String>) {
        self.filter.year = year.into();
        self.selected_work = 0;
    }

    /// Step the year filter through "all" and each available year.
    pub fn cycle_year_filter(&mut self) {
        let mut options = vec![String::new()];
        options.extend(self.year_options().iter().map(|y| y.to_string()));
        let current = options
            .iter()
            .position(|o| *o == self.filter.year.trim())
            .unwrap_or(0);
        let next = options[(current + 1) % options.len()].clone();
        self.set_year_filter(next);
    }

    /// The list the sort and filters operate on: the keyword result while a
    /// keyword is active, else the profile's works.
    pub fn held_works(&self) -> &[Work] {
        let held = if self.keyword.is_some() {
            self.keyword_works.loaded()
        } else {
            self.profile.loaded().map(|p| &p.works)
        };
        held.map(Vec::as_slice).unwrap_or(&[])
    }

    /// Works in display order after sort and filters.
    pub fn displayed_works(&self) -> Vec<Work> {
        let ordered = match self.sort {
            SortOrder::MostCited => self.ranked_works.loaded().cloned().unwrap_or_default(),
            SortOrder::Recent => {
                let mut works = self.held_works().to_vec();
                sort_by_year_desc(&mut works);
                works
            }
        };
        self.filter.apply(&ordered)
    }

    /// True while the list that should be displayed is still being fetched.
    pub fn works_loading(&self) -> bool {
        (self.keyword.is_some() && self.keyword_works.is_loading())
            || (self.sort == SortOrder::MostCited && self.ranked_works.is_loading())
    }

    pub fn year_options(&self) -> Vec<i32> {
        available_years(self.held_works())
    }

    pub fn select_next_work(&mut self) {
        let count = self.displayed_works().len();
        if count > 0 {
            self.selected_work = (self.selected_work + 1).min(count - 1);
        }
    }

    pub fn select_prev_work(&mut self) {
        self.selected_work = self.selected_work.saturating_sub(1);
    }

    /// Open the detail popup. Works with a DOI fetch their full record;
    /// the rest show the summary. Resolver URLs are reduced to the bare DOI.
    pub fn open_work(&mut self, work: Work) -> Option<Request> {
        let doi = work.doi().map(normalize_doi);
        match doi {
            Some(doi) => {
                self.modal = Some(WorkModal {
                    work,
                    detail: Load::Loading,
                });
                Some(Request::WorkDetail {
                    ticket: self.tracker.issue(RequestKind::WorkDetail),
                    doi,
                })
            }
            None => {
                self.tracker.invalidate(RequestKind::WorkDetail);
                self.modal = Some(WorkModal {
                    work,
                    detail: Load::Idle,
                });
                None
            }
        }
    }

    pub fn open_selected_work(&mut self) -> Option<Request> {
        let work = self.displayed_works().get(self.selected_work).cloned()?;
        self.open_work(work)
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.tracker.invalidate(RequestKind::WorkDetail);
    }

    /// Export the profile document into `directory`.
    pub fn export(&mut self, directory: PathBuf) -> Request {
        self.notice = Some("Exportando...".to_string());
        Request::Export {
            ticket: self.tracker.issue(RequestKind::Export),
            orcid: self.author_id.clone(),
            directory,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Apply a finished request. Returns false when the response was stale
    /// or not meant for this screen.
    pub fn apply(&mut self, response: Response) -> bool {
        if !self.tracker.accept(response.ticket()) {
            return false;
        }
        match response {
            Response::Profile { result, .. } => {
                if let Err(e) = &result {
                    self.fail("profile", e.to_string());
                }
                self.profile = Load::from_result(result);
                self.keyword_cursor = 0;
            }
            Response::KeywordWorks { result, .. } => {
                if let Err(e) = &result {
                    self.fail("keyword works", e.to_string());
                }
                self.keyword_works = Load::from_result(result);
            }
            Response::CitationWorks { result, .. } => {
                if let Err(e) = &result {
                    self.fail("citation ranking", e.to_string());
                }
                self.ranked_works = Load::from_result(result);
            }
            Response::Metrics { result, .. } => {
                if let Err(e) = &result {
                    tracing::warn!("metrics failed: {}", e);
                }
                self.metrics = Load::from_result(result);
            }
            Response::Stats { result, .. } => {
                if let Err(e) = &result {
                    tracing::warn!("stats failed: {}", e);
                }
                self.stats = Load::from_result(result);
            }
            Response::WorkDetail { result, .. } => {
                let Some(modal) = self.modal.as_mut() else {
                    return false;
                };
                if let Err(e) = &result {
                    tracing::warn!("work detail failed, showing summary: {}", e);
                }
                modal.detail = Load::from_result(result);
            }
            Response::Export { result, .. } => match result {
                Ok(path) => {
                    self.notice = Some(format!("Exportado para {}", path.display()));
                }
                Err(e) => {
                    self.notice = None;
                    self.fail("export", e.to_string());
                }
            },
            Response::Search { .. } | Response::Auth { .. } => return false,
        }
        true
    }

    fn fail(&mut self, what: &str, message: String) {
        tracing::warn!("{} failed: {}", what, message);
        self.page_error = Some(message);
    }
}
