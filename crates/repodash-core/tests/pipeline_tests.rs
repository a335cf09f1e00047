use chrono::{Duration, Utc};
use repodash_api::GitHubRepo;
use repodash_core::{
    credentials::Credentials,
    dashboard::{fetch_repos, load_repos},
    Dashboard, Error, RepoSource, RepoType, Result,
};
use std::sync::Arc;

mockall::mock! {
    pub Source {}

    #[async_trait::async_trait]
    impl RepoSource for Source {
        async fn list_user_repos(&self, credentials: &Credentials) -> Result<Vec<GitHubRepo>>;
    }
}

fn create_raw_repo(id: u64, name: &str, private: bool, language: Option<&str>) -> GitHubRepo {
    GitHubRepo {
        id,
        name: name.to_string(),
        private,
        language: language.map(String::from),
        size: id * 100,
        updated_at: Utc::now() - Duration::days(id as i64) - Duration::minutes(5),
    }
}

fn octocat() -> Credentials {
    Credentials::resolve(Some("ghp_abc".into()), Some("octocat".into())).unwrap()
}

#[tokio::test]
async fn test_fetch_repos_normalizes_every_record_in_order() {
    let raw = vec![
        create_raw_repo(3, "gamma", true, Some("Rust")),
        create_raw_repo(1, "alpha", false, None),
        create_raw_repo(2, "beta", false, Some("TypeScript")),
    ];
    let expected = raw.clone();

    let mut source = MockSource::new();
    source
        .expect_list_user_repos()
        .times(1)
        .returning(move |_| Ok(raw.clone()));

    let repos = fetch_repos(&source, &octocat()).await.unwrap();

    assert_eq!(repos.len(), expected.len());
    for (repo, record) in repos.iter().zip(&expected) {
        assert_eq!(repo.id, record.id);
        assert_eq!(repo.title, record.name);
        assert_eq!(repo.size, record.size);
        assert_eq!(repo.repo_type == RepoType::Private, record.private);
        assert_eq!(repo.language == "Unknown", record.language.is_none());
        assert_eq!(repo.last_updated, record.id);
    }
}

#[tokio::test]
async fn test_fetch_repos_propagates_failure() {
    let mut source = MockSource::new();
    source
        .expect_list_user_repos()
        .returning(|_| Err(Error::FetchFailure("User not found: octocat".into())));

    let result = fetch_repos(&source, &octocat()).await;
    assert!(matches!(result, Err(Error::FetchFailure(_))));
}

#[tokio::test]
async fn test_load_repos_swallows_failure() {
    let mut source = MockSource::new();
    source
        .expect_list_user_repos()
        .times(1)
        .returning(|_| Err(Error::FetchFailure("Status 404 Not Found".into())));

    let repos = load_repos(&source, &octocat()).await;
    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_unconfigured_dashboard_makes_no_calls() {
    let mut source = MockSource::new();
    source.expect_list_user_repos().never();

    let mut dashboard = Dashboard::start(Arc::new(source), Credentials::resolve(None, None));
    dashboard.wait_loaded().await;

    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.repo_count(), 0);
}

#[tokio::test]
async fn test_dashboard_end_to_end_search() {
    let mut source = MockSource::new();
    source.expect_list_user_repos().returning(|_| {
        Ok(vec![
            create_raw_repo(1, "alpha", false, None),
            create_raw_repo(2, "beta", true, Some("Go")),
            create_raw_repo(3, "Alphabet-soup", false, Some("C")),
            create_raw_repo(4, "delta", false, None),
            create_raw_repo(5, "epsilon", false, None),
        ])
    });

    let mut dashboard = Dashboard::start(Arc::new(source), Ok(octocat()));
    dashboard.wait_loaded().await;
    assert_eq!(dashboard.repo_count(), 5);

    let all: Vec<u64> = dashboard.filtered().iter().map(|r| r.id).collect();
    assert_eq!(all, vec![1, 2, 3, 4, 5]);

    dashboard.set_search_term("ALPHA");
    let hits: Vec<&str> = dashboard.filtered().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(hits, vec!["alpha", "Alphabet-soup"]);

    // Language is never searched
    dashboard.set_search_term("go");
    assert_eq!(dashboard.repo_count(), 0);

    dashboard.teardown();
}
