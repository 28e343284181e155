//! Client-side state for the portfolio single-page app.
//!
//! Nothing here renders markup. The types hold what a view layer reads and
//! the transitions it triggers; every remote call goes through a trait so the
//! same state machines run against the HTTP API or in-process services.

pub mod api_client;
pub mod auth_gate;
pub mod forms;
pub mod intake;
pub mod local;
pub mod notifications;
pub mod profile_cache;
pub mod record_cache;
pub mod repo_feed;
pub mod session;
pub mod view_router;

pub use api_client::{ApiClientError, PortfolioApiClient};
pub use auth_gate::{AdminAuthBackend, AuthBackendError, AuthGate, GateError, GateState};
pub use forms::{FormError, ProfileForm, ProjectForm};
pub use intake::{ContactForm, IntakeBackend, IntakeError, IntakeForm, JobOfferForm, Submission};
pub use local::LocalBackend;
pub use notifications::{Notification, NotificationLevel, Notifications};
pub use profile_cache::ProfileCache;
pub use record_cache::{CacheError, RecordCache};
pub use repo_feed::{FeedError, FeedPageSource, FeedStatus, RepoFeed};
pub use session::{Session, SessionContext};
pub use view_router::{View, ViewRouter};
