//! Per-screen view state
//!
//! Each screen owns a plain state object. Actions on it return the
//! `Request`s to run, and finished `Response`s are applied back; nothing
//! here touches the network or the terminal.

mod auth_form;
mod chart;
mod dashboard;
mod home;
mod load;
mod request;
mod route;

pub use auth_form::{AuthField, AuthForm, AuthMode, AuthStatus};
pub use chart::ChartSlot;
pub use dashboard::{DashboardState, DashboardView, Tab, WorkModal};
pub use home::{HomeState, SearchStatus};
pub use load::Load;
pub use request::{Request, RequestKind, RequestTracker, Response, Ticket};
pub use route::Route;
