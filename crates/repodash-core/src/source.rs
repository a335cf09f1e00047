use repodash_api::GitHubRepo;

use crate::{credentials::Credentials, Result};

/// Where the raw repo list comes from
///
/// GitHub in production, a mock in tests. Implementations make exactly one
/// request per call - no paging, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_user_repos(&self, credentials: &Credentials) -> Result<Vec<GitHubRepo>>;
}
