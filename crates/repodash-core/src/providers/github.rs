// GitHub provider - bridges the API client with the RepoSource trait
use async_trait::async_trait;
use repodash_api::{GitHubClient, GitHubRepo};

use crate::{config::GitHubConfig, credentials::Credentials, source::RepoSource, Result};

/// Wrapper around GitHubClient that implements RepoSource
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        Ok(Self {
            client: GitHubClient::with_base_url(config.api_url.clone())?,
        })
    }

    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl RepoSource for GitHubProvider {
    async fn list_user_repos(&self, credentials: &Credentials) -> Result<Vec<GitHubRepo>> {
        let repos = self
            .client
            .list_user_repos(credentials.token(), credentials.username())
            .await?;
        Ok(repos)
    }
}
