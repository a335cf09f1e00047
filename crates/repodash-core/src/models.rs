use serde::{Deserialize, Serialize};

/// Repository summary - what the dashboard actually shows
///
/// Built once by the normalizer and never touched again. `last_updated` is
/// "days since GitHub last saw a change" as of the moment we normalized, so
/// it quietly goes stale while the dashboard stays open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub repo_type: RepoType,
    pub language: String,
    /// Provider units; GitHub reports kilobytes
    pub size: u64,
    pub last_updated: u64,
}

/// Visibility as reported by the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RepoType {
    Public,
    Private,
}

impl RepoType {
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            RepoType::Private
        } else {
            RepoType::Public
        }
    }
}

impl std::fmt::Display for RepoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoType::Public => f.pad("Public"),
            RepoType::Private => f.pad("Private"),
        }
    }
}
