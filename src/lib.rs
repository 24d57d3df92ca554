pub mod aggregate;
pub mod config;
pub mod filter;
pub mod github;
pub mod message;
pub mod models;
pub mod notifications;
pub mod orchestrator;
pub mod payload;

pub use aggregate::ReviewGroup;
pub use config::{ConfigFormatError, Provider, ReviewerMap};
pub use github::GitHubClient;
pub use models::{MalformedRecordError, PullRequest};
pub use notifications::Notifier;
pub use orchestrator::{build_payload, Orchestrator, ReminderOptions};
pub use payload::NotificationPayload;
