use thiserror::Error;

/// All the ways the repo pipeline can go wrong
///
/// `ConfigMissing` and `FetchFailure` never reach the screen; the dashboard
/// logs them and shows an empty list. The rest are startup problems.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    #[error("Failed to fetch repositories: {0}")]
    FetchFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<repodash_api::GitHubError> for Error {
    fn from(err: repodash_api::GitHubError) -> Self {
        Error::FetchFailure(err.to_string())
    }
}
