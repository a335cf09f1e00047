use crate::models::Repo;

/// Does this repo's title contain `term`, ignoring case?
///
/// Only the title is looked at. Searching "rust" does not find a repo just
/// because it's written in Rust.
pub fn matches_title(repo: &Repo, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    repo.title.to_lowercase().contains(&term.to_lowercase())
}

/// Filter repos by title, keeping their original order
pub fn filter_repos<'a>(repos: &'a [Repo], term: &str) -> Vec<&'a Repo> {
    repos.iter().filter(|repo| matches_title(repo, term)).collect()
}
