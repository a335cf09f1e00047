// Core of the dashboard: credentials -> one fetch -> normalize -> filter
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod search;
pub mod source;
pub mod view;

pub use config::Config;
pub use credentials::Credentials;
pub use dashboard::Dashboard;
pub use error::Error;
pub use models::{Repo, RepoType};
pub use source::RepoSource;
pub use view::{LoadPhase, ViewState};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
