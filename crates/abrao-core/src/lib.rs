//! Abrao Core - client library for the abrao researcher-profile platform
//!
//! This crate holds everything a front end needs besides drawing:
//!
//! - **Model**: transport documents (profile, works, metrics, search hits, auth replies)
//! - **Identifiers**: ORCID recognition that routes a search to lookup or name search
//! - **API**: the `ProfileApi` trait and its reqwest implementation
//! - **Filter**: title/year filtering and sort order of work lists
//! - **Format**: pt-BR number formatting for the metrics list
//! - **State**: per-screen state (home, dashboard, sign-in form), routes,
//!   request tickets that fence out stale responses, and the chart slot
//! - **Config**: TOML configuration with environment overrides
//! - **Export**: saving exported profile documents
//!
//! # Architecture
//!
//! Screens never call the network themselves. An action on a state object
//! returns a `Request`; the front end executes it against a `ProfileApi` on
//! its runtime and hands the `Response` back to `apply`, which drops it if a
//! newer request of the same kind has been issued since.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod identifiers;
pub mod model;
pub mod state;

pub use api::{Endpoints, HttpProfileApi, ProfileApi};
pub use config::{AbraoConfig, ApiConfig, ExportConfig, UiConfig};
pub use error::{AbraoError, ApiError, ConfigError, Result};
pub use filter::{SortOrder, WorkFilter};
pub use identifiers::{is_orcid, SearchQuery};
pub use model::{
    Affiliation, AuthOutcome, AuthorHit, Authorship, Credentials, Metrics, MostCited, Profile,
    PublicationDetail, PublicationYear, Registration, UserRecord, Work, YearSeries,
};
pub use state::{
    AuthForm, AuthMode, ChartSlot, DashboardState, DashboardView, HomeState, Load, Request,
    Response, Route, Tab,
};
