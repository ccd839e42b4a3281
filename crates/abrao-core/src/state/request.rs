//! Requests screens issue, their responses, and stale-response fencing
//!
//! Every request carries a `Ticket`. A screen applies a response only if its
//! ticket is still the latest one issued for that kind of request, so a slow
//! reply can never overwrite the result of a newer one.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::ProfileApi;
use crate::error::{AbraoError, ApiError};
use crate::export::save_document;
use crate::identifiers::SearchQuery;
use crate::model::{
    AuthOutcome, AuthorHit, Credentials, Metrics, Profile, PublicationDetail, Registration, Work,
    YearSeries,
};

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Kinds of request; fencing is per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Search,
    Profile,
    KeywordWorks,
    CitationWorks,
    Metrics,
    Stats,
    WorkDetail,
    Export,
    Auth,
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    scope: u64,
    kind: RequestKind,
    generation: u64,
}

impl Ticket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// Issues tickets for one screen instance.
///
/// Each tracker has its own scope, so tickets from a screen that has since
/// been replaced never match the new one.
#[derive(Debug)]
pub struct RequestTracker {
    scope: u64,
    generations: HashMap<RequestKind, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            scope: NEXT_SCOPE.fetch_add(1, Ordering::Relaxed),
            generations: HashMap::new(),
        }
    }

    /// Issue a ticket, superseding every earlier ticket of the same kind.
    pub fn issue(&mut self, kind: RequestKind) -> Ticket {
        let generation = self.generations.entry(kind).or_insert(0);
        *generation += 1;
        Ticket {
            scope: self.scope,
            kind,
            generation: *generation,
        }
    }

    /// Supersede outstanding tickets of `kind` without issuing a new one.
    pub fn invalidate(&mut self, kind: RequestKind) {
        *self.generations.entry(kind).or_insert(0) += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.scope == self.scope && self.generations.get(&ticket.kind) == Some(&ticket.generation)
    }

    /// `is_current`, logging the drop when it is not.
    pub fn accept(&self, ticket: Ticket) -> bool {
        let current = self.is_current(ticket);
        if !current {
            tracing::debug!(kind = ?ticket.kind, "dropping stale response");
        }
        current
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A backend call a screen wants made.
#[derive(Debug, Clone)]
pub enum Request {
    Search {
        ticket: Ticket,
        query: SearchQuery,
        max_results: u32,
    },
    Profile {
        ticket: Ticket,
        orcid: String,
    },
    KeywordWorks {
        ticket: Ticket,
        orcid: String,
        keyword: String,
    },
    CitationWorks {
        ticket: Ticket,
        orcid: String,
        keyword: Option<String>,
    },
    Metrics {
        ticket: Ticket,
        orcid: String,
    },
    Stats {
        ticket: Ticket,
        orcid: String,
    },
    WorkDetail {
        ticket: Ticket,
        doi: String,
    },
    Export {
        ticket: Ticket,
        orcid: String,
        directory: PathBuf,
    },
    SignIn {
        ticket: Ticket,
        credentials: Credentials,
    },
    SignUp {
        ticket: Ticket,
        registration: Registration,
    },
}

/// The answer to a `Request`, carrying the same ticket.
#[derive(Debug)]
pub enum Response {
    Search {
        ticket: Ticket,
        result: Result<Vec<AuthorHit>, ApiError>,
    },
    Profile {
        ticket: Ticket,
        result: Result<Profile, ApiError>,
    },
    KeywordWorks {
        ticket: Ticket,
        result: Result<Vec<Work>, ApiError>,
    },
    CitationWorks {
        ticket: Ticket,
        result: Result<Vec<Work>, ApiError>,
    },
    Metrics {
        ticket: Ticket,
        result: Result<Metrics, ApiError>,
    },
    Stats {
        ticket: Ticket,
        result: Result<YearSeries, ApiError>,
    },
    WorkDetail {
        ticket: Ticket,
        result: Result<PublicationDetail, ApiError>,
    },
    Export {
        ticket: Ticket,
        result: Result<PathBuf, AbraoError>,
    },
    Auth {
        ticket: Ticket,
        result: Result<AuthOutcome, ApiError>,
    },
}

impl Request {
    pub fn ticket(&self) -> Ticket {
        match self {
            Request::Search { ticket, .. }
            | Request::Profile { ticket, .. }
            | Request::KeywordWorks { ticket, .. }
            | Request::CitationWorks { ticket, .. }
            | Request::Metrics { ticket, .. }
            | Request::Stats { ticket, .. }
            | Request::WorkDetail { ticket, .. }
            | Request::Export { ticket, .. }
            | Request::SignIn { ticket, .. }
            | Request::SignUp { ticket, .. } => *ticket,
        }
    }

    /// Run the call against `api`. Never fails: errors travel in the
    /// response for the screen to store.
    pub async fn execute(self, api: &dyn ProfileApi) -> Response {
        match self {
            Request::Search {
                ticket,
                query,
                max_results,
            } => {
                let result = match &query {
                    SearchQuery::Orcid(orcid) => api.author_name(orcid).await.map(|name| {
                        vec![AuthorHit {
                            orcid: orcid.clone(),
                            full_name: name.full_name,
                        }]
                    }),
                    SearchQuery::Name(name) => {
                        api.search_by_name(name, max_results).await.map(|mut hits| {
                            hits.truncate(max_results as usize);
                            hits
                        })
                    }
                };
                Response::Search { ticket, result }
            }
            Request::Profile { ticket, orcid } => Response::Profile {
                ticket,
                result: api.profile(&orcid).await,
            },
            Request::KeywordWorks {
                ticket,
                orcid,
                keyword,
            } => Response::KeywordWorks {
                ticket,
                result: api.works_by_keyword(&orcid, &keyword).await,
            },
            Request::CitationWorks {
                ticket,
                orcid,
                keyword,
            } => Response::CitationWorks {
                ticket,
                result: api.works_by_citations(&orcid, keyword.as_deref()).await,
            },
            Request::Metrics { ticket, orcid } => Response::Metrics {
                ticket,
                result: api.metrics(&orcid).await,
            },
            Request::Stats { ticket, orcid } => Response::Stats {
                ticket,
                result: api.stats(&orcid).await,
            },
            Request::WorkDetail { ticket, doi } => Response::WorkDetail {
                ticket,
                result: api.publication(&doi).await,
            },
            Request::Export {
                ticket,
                orcid,
                directory,
            } => {
                let result = match api.export_xml(&orcid).await {
                    Ok(bytes) => save_blocking(directory, orcid, bytes).await,
                    Err(e) => Err(e.into()),
                };
                Response::Export { ticket, result }
            }
            Request::SignIn {
                ticket,
                credentials,
            } => Response::Auth {
                ticket,
                result: api.sign_in(&credentials).await,
            },
            Request::SignUp {
                ticket,
                registration,
            } => Response::Auth {
                ticket,
                result: api.sign_up(&registration).await,
            },
        }
    }
}

/// Write an export on the blocking pool so file I/O stays off the async
/// workers.
async fn save_blocking(
    directory: PathBuf,
    orcid: String,
    bytes: Vec<u8>,
) -> Result<PathBuf, AbraoError> {
    tokio::task::spawn_blocking(move || save_document(&directory, &orcid, &bytes))
        .await
        .unwrap_or_else(|e| Err(AbraoError::Export(format!("export task failed: {}", e))))
}

impl Response {
    pub fn ticket(&self) -> Ticket {
        match self {
            Response::Search { ticket, .. }
            | Response::Profile { ticket, .. }
            | Response::KeywordWorks { ticket, .. }
            | Response::CitationWorks { ticket, .. }
            | Response::Metrics { ticket, .. }
            | Response::Stats { ticket, .. }
            | Response::WorkDetail { ticket, .. }
            | Response::Export { ticket, .. }
            | Response::Auth { ticket, .. } => *ticket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RequestKind::Search);
        let second = tracker.issue(RequestKind::Search);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = RequestTracker::new();
        let profile = tracker.issue(RequestKind::Profile);
        let _metrics = tracker.issue(RequestKind::Metrics);
        assert!(tracker.is_current(profile));
    }

    #[test]
    fn test_invalidate() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue(RequestKind::WorkDetail);
        tracker.invalidate(RequestKind::WorkDetail);
        assert!(!tracker.accept(ticket));
    }

    #[test]
    fn test_tickets_do_not_cross_trackers() {
        let mut old = RequestTracker::new();
        let mut new = RequestTracker::new();
        let stale = old.issue(RequestKind::Search);
        let _fresh = new.issue(RequestKind::Search);
        assert!(!new.is_current(stale));
    }
}
