// GitHub REST client - lists the repositories of a single account
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("repodash/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Authentication failed - check the access token")]
    AuthRequired,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise (or a local test server)
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List repositories owned by `username`.
    ///
    /// Only the first page GitHub hands back is returned. There is no
    /// follow-up on the `Link` header and no retry: one request, one answer.
    pub async fn list_user_repos(&self, token: &str, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", token))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound(username.to_string()));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GitHubError::AuthRequired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;
        debug!("GitHub returned {} repositories for {}", repos.len(), username);

        Ok(repos)
    }
}

/// One entry of `GET /users/{username}/repos`, trimmed to what we use.
/// GitHub sends a lot more; serde ignores the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: u64,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const REPOS_JSON: &str = r#"[
        {"id": 1, "name": "alpha", "private": false, "language": null, "size": 12,
         "updated_at": "2024-01-01T00:00:00Z", "full_name": "octocat/alpha"},
        {"id": 2, "name": "beta", "private": true, "language": "Rust", "size": 340,
         "updated_at": "2024-02-01T12:30:00Z"}
    ]"#;

    /// Serve exactly one canned HTTP response and hand back the raw request text.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_parse_repo_list() {
        let repos: Vec<GitHubRepo> = serde_json::from_str(REPOS_JSON).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "alpha");
        assert_eq!(repos[0].language, None);
        assert!(repos[1].private);
        assert_eq!(repos[1].language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_missing_language_field_is_none() {
        let json = r#"{"id": 7, "name": "x", "private": false, "size": 0,
                       "updated_at": "2024-01-01T00:00:00Z"}"#;
        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.language, None);
    }

    #[test]
    fn test_default_base_url() {
        let client = GitHubClient::new().unwrap();
        assert_eq!(client.base_url(), GITHUB_API_BASE);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GitHubClient::with_base_url("https://ghe.example.com/api/v3/".into()).unwrap();
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
    }

    #[tokio::test]
    async fn test_list_user_repos_sends_token_and_parses() {
        let (base_url, server) = serve_once("200 OK", REPOS_JSON).await;
        let client = GitHubClient::with_base_url(base_url).unwrap();

        let repos = client.list_user_repos("s3cret", "octocat").await.unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].id, 1);
        assert_eq!(repos[1].name, "beta");

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /users/octocat/repos http/1.1"));
        assert!(request.contains("authorization: token s3cret"));
        assert!(request.contains("user-agent: repodash/"));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let (base_url, server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#).await;
        let client = GitHubClient::with_base_url(base_url).unwrap();

        let result = client.list_user_repos("t", "nobody").await;
        assert!(matches!(result, Err(GitHubError::NotFound(ref u)) if u == "nobody"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;
        let client = GitHubClient::with_base_url(base_url).unwrap();

        let result = client.list_user_repos("t", "octocat").await;
        assert!(matches!(result, Err(GitHubError::RequestFailed(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let (base_url, server) = serve_once("401 Unauthorized", "{}").await;
        let client = GitHubClient::with_base_url(base_url).unwrap();

        let result = client.list_user_repos("bad", "octocat").await;
        assert!(matches!(result, Err(GitHubError::AuthRequired)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_garbage_body_is_parse_error() {
        let (base_url, server) = serve_once("200 OK", "not json").await;
        let client = GitHubClient::with_base_url(base_url).unwrap();

        let result = client.list_user_repos("t", "octocat").await;
        assert!(matches!(result, Err(GitHubError::ParseError(_))));
        server.await.unwrap();
    }
}
