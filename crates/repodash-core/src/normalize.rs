// Raw GitHub records -> Repo summaries
use chrono::{DateTime, Utc};
use repodash_api::GitHubRepo;

use crate::models::{Repo, RepoType};

/// Shown when GitHub can't tell what language a repo is written in
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Normalize against the wall clock.
///
/// Calling this twice on the same record a day apart gives two different
/// `last_updated` values. That's expected - it's a snapshot.
pub fn normalize(raw: GitHubRepo) -> Repo {
    normalize_at(raw, Utc::now())
}

/// Normalize with an explicit "now"
pub fn normalize_at(raw: GitHubRepo, now: DateTime<Utc>) -> Repo {
    Repo {
        id: raw.id,
        title: raw.name,
        repo_type: RepoType::from_private_flag(raw.private),
        language: raw.language.unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        size: raw.size,
        last_updated: days_since(raw.updated_at, now),
    }
}

/// Normalize a whole page, keeping GitHub's order
pub fn normalize_all(raw: Vec<GitHubRepo>, now: DateTime<Utc>) -> Vec<Repo> {
    raw.into_iter().map(|r| normalize_at(r, now)).collect()
}

/// Whole days between `then` and `now`, floored. Timestamps from the future
/// (clock skew) count as zero.
pub fn days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed_ms = (now - then).num_milliseconds();
    elapsed_ms.div_euclid(MILLIS_PER_DAY).max(0) as u64
}
