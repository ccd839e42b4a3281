//! Transport documents received from the profile backend
//!
//! These are read-only from the client's side: built from a response,
//! held by a screen, dropped on navigation.

mod auth;
mod metrics;
mod profile;
mod search;
mod work;

pub use auth::{AuthOutcome, AuthReply, Credentials, Registration, UserRecord};
pub use metrics::{Metrics, MostCited, YearBucket, YearSeries};
pub use profile::{Affiliation, ExternalId, PersonalInfo, Profile};
pub use search::{AuthorHit, AuthorName};
pub use work::{Authorship, PublicationDetail, PublicationYear, Work};
