// Credential resolution - token + username, or nothing happens
use tracing::error;

use crate::{config::GitHubConfig, Error, Result};

/// Env vars the CLI reads the credentials from
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const USERNAME_ENV: &str = "GITHUB_USERNAME";

/// A resolved access token and account name. Both are guaranteed non-blank.
///
/// Holding one of these is the precondition for any network call, so a
/// dashboard without credentials simply has nothing to fetch with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    username: String,
}

impl Credentials {
    /// Resolve from optional values. Blank strings count as missing.
    ///
    /// Logs one diagnostic when something is missing.
    pub fn resolve(token: Option<String>, username: Option<String>) -> Result<Self> {
        let token = token.filter(|t| !t.trim().is_empty());
        let username = username.filter(|u| !u.trim().is_empty());

        match (token, username) {
            (Some(token), Some(username)) => Ok(Self {
                token: token.trim().to_string(),
                username: username.trim().to_string(),
            }),
            (token, username) => {
                let missing = match (token.is_none(), username.is_none()) {
                    (true, true) => "GitHub token and username",
                    (true, false) => "GitHub token",
                    _ => "GitHub username",
                };
                error!("{} is missing - not fetching repositories", missing);
                Err(Error::ConfigMissing(missing.to_string()))
            }
        }
    }

    /// First non-blank value wins for each field: explicit override, then
    /// the config file.
    pub fn resolve_layered(
        token: Option<String>,
        username: Option<String>,
        file: &GitHubConfig,
    ) -> Result<Self> {
        let token = first_present(token, file.token.clone());
        let username = first_present(username, file.username.clone());
        Self::resolve(token, username)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// Never print the token.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

fn first_present(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred
        .filter(|v| !v.trim().is_empty())
        .or_else(|| fallback.filter(|v| !v.trim().is_empty()))
}
