// View model - everything the screen needs, computed up front
use repodash_core::{Dashboard, Repo};

/// Snapshot of the dashboard for one frame. Rendering reads this and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub account: String,
    pub search_term: String,
    pub repo_count: usize,
    pub loading: bool,
    pub cards: Vec<RepoCard>,
}

/// One repository card
#[derive(Debug, Clone, PartialEq)]
pub struct RepoCard {
    pub id: u64,
    pub title: String,
    pub badge: String,
    pub language: String,
    pub size_label: String,
    pub updated_label: String,
    pub private: bool,
    /// Last card in the list gets no separator under it
    pub last: bool,
}

pub fn view_model(dashboard: &Dashboard, account: &str) -> DashboardView {
    let filtered = dashboard.filtered();
    let total = filtered.len();

    let cards = filtered
        .into_iter()
        .enumerate()
        .map(|(index, repo)| repo_card(repo, index + 1 == total))
        .collect();

    DashboardView {
        account: account.to_string(),
        search_term: dashboard.search_term().to_string(),
        repo_count: total,
        loading: dashboard.is_loading(),
        cards,
    }
}

fn repo_card(repo: &Repo, last: bool) -> RepoCard {
    RepoCard {
        id: repo.id,
        title: repo.title.clone(),
        badge: repo.repo_type.to_string(),
        language: repo.language.clone(),
        size_label: format_size_kb(repo.size),
        updated_label: format_last_updated(repo.last_updated),
        private: repo.repo_type == repodash_core::RepoType::Private,
        last,
    }
}

/// GitHub reports size in KB
pub fn format_size_kb(size_kb: u64) -> String {
    const KB_PER_MB: u64 = 1024;
    const KB_PER_GB: u64 = 1024 * 1024;

    if size_kb >= KB_PER_GB {
        format!("{:.1} GB", size_kb as f64 / KB_PER_GB as f64)
    } else if size_kb >= KB_PER_MB {
        format!("{:.1} MB", size_kb as f64 / KB_PER_MB as f64)
    } else {
        format!("{} KB", size_kb)
    }
}

pub fn format_last_updated(days: u64) -> String {
    match days {
        0 => "Updated today".to_string(),
        1 => "Updated 1 day ago".to_string(),
        n => format!("Updated {} days ago", n),
    }
}
