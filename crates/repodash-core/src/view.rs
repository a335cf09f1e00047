// View state - the repo list plus whatever the viewer typed into the search box
use tracing::warn;

use crate::{models::Repo, search::filter_repos};

/// Loading until the one fetch attempt is over, Loaded forever after.
///
/// A failed fetch is still Loaded; it just looks like an account with no repos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    repos: Vec<Repo>,
    search_term: String,
    phase: LoadPhase,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            repos: Vec::new(),
            search_term: String::new(),
            phase: LoadPhase::Loading,
        }
    }

    /// Store the result of the fetch. Only the first call counts.
    pub fn finish_loading(&mut self, repos: Vec<Repo>) {
        if self.phase == LoadPhase::Loaded {
            warn!("Ignoring a second repo list; the view is already loaded");
            return;
        }
        self.repos = repos;
        self.phase = LoadPhase::Loaded;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Everything we got back, unfiltered
    pub fn repos(&self) -> &[Repo] {
        &self.repos
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Repos whose title matches the current search term, in fetch order
    pub fn filtered(&self) -> Vec<&Repo> {
        filter_repos(&self.repos, &self.search_term)
    }

    /// Number of repos currently shown
    pub fn repo_count(&self) -> usize {
        self.filtered().len()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
