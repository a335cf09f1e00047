// Dashboard controller - owns the view state and the one-shot fetch
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::{
    credentials::Credentials,
    models::Repo,
    normalize::normalize_all,
    source::RepoSource,
    view::ViewState,
    Result,
};

/// Fetch and normalize. Errors come back as-is.
pub async fn fetch_repos(source: &dyn RepoSource, credentials: &Credentials) -> Result<Vec<Repo>> {
    let raw = source.list_user_repos(credentials).await?;
    Ok(normalize_all(raw, Utc::now()))
}

/// Fetch and normalize, swallowing errors into an empty list.
///
/// The viewer can't tell "no repos" from "fetch failed"; the log can.
pub async fn load_repos(source: &dyn RepoSource, credentials: &Credentials) -> Vec<Repo> {
    match fetch_repos(source, credentials).await {
        Ok(repos) => {
            info!("Loaded {} repositories for {}", repos.len(), credentials.username());
            repos
        }
        Err(e) => {
            error!("Error fetching repositories: {}", e);
            Vec::new()
        }
    }
}

/// The in-flight fetch. Dropping it aborts the task.
struct FetchTask {
    handle: JoinHandle<()>,
    result: oneshot::Receiver<Vec<Repo>>,
}

impl FetchTask {
    fn spawn(source: Arc<dyn RepoSource>, credentials: Credentials) -> Self {
        let (tx, rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let repos = load_repos(source.as_ref(), &credentials).await;
            // Receiver gone means the dashboard was torn down first
            if tx.send(repos).is_err() {
                debug!("Dashboard discarded before the fetch finished; dropping result");
            }
        });

        Self { handle, result: rx }
    }

    fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// One dashboard, one fetch.
///
/// `start` kicks off the fetch (if there are credentials) and returns right
/// away in the Loading phase. The result lands in the view on the next
/// `poll` or via `wait_loaded`. There is no refresh.
pub struct Dashboard {
    state: ViewState,
    fetch: Option<FetchTask>,
}

impl Dashboard {
    /// Must be called from inside a tokio runtime.
    pub fn start(source: Arc<dyn RepoSource>, credentials: Result<Credentials>) -> Self {
        let mut state = ViewState::new();

        let fetch = match credentials {
            Ok(credentials) => {
                info!("Fetching repositories for {}", credentials.username());
                Some(FetchTask::spawn(source, credentials))
            }
            // Credentials::resolve already logged what is missing
            Err(_) => {
                state.finish_loading(Vec::new());
                None
            }
        };

        Self { state, fetch }
    }

    /// Wrap an existing state; nothing gets fetched
    pub fn from_state(state: ViewState) -> Self {
        Self { state, fetch: None }
    }

    /// Apply the fetch result if it's ready. Never blocks.
    ///
    /// Returns true when this call moved the view to Loaded.
    pub fn poll(&mut self) -> bool {
        let Some(task) = self.fetch.as_mut() else {
            return false;
        };

        match task.result.try_recv() {
            Ok(repos) => {
                self.fetch = None;
                self.state.finish_loading(repos);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                // Task died without reporting (panicked or aborted)
                self.fetch = None;
                self.state.finish_loading(Vec::new());
                true
            }
        }
    }

    /// Wait until the fetch attempt is over
    pub async fn wait_loaded(&mut self) {
        if let Some(mut task) = self.fetch.take() {
            let repos = (&mut task.result).await.unwrap_or_default();
            self.state.finish_loading(repos);
        }
    }

    /// Cancel any in-flight fetch and drop the view
    pub fn teardown(mut self) {
        if let Some(task) = self.fetch.take() {
            debug!("Tearing down dashboard with a fetch still in flight");
            task.cancel();
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn filtered(&self) -> Vec<&Repo> {
        self.state.filtered()
    }

    pub fn search_term(&self) -> &str {
        self.state.search_term()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub fn repo_count(&self) -> usize {
        self.state.repo_count()
    }
}
