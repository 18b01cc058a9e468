//! GitHub REST API client.

use std::fmt;
use std::str::FromStr;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::IssueTracker;
use super::error::{Result, TrackerError};
use crate::model::{Article, Comment};
use crate::pagination::PaginationQuery;

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository holding the blog issues, in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(TrackerError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Error body returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// `IssueTracker` backed by the GitHub REST API.
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: Url,
    repository: Repository,
}

impl GitHubClient {
    /// Creates client for a repository.
    ///
    /// # Arguments
    ///
    /// * `api_url`: API base URL (`DEFAULT_API_URL` for github.com)
    /// * `repository`: Repository holding the articles
    /// * `token`: Optional bearer token, sent on every request
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(api_url: Url, repository: Repository, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("issueblog"));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| TrackerError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url,
            repository,
        })
    }

    fn issue_url(&self, id: u64, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}{}",
            self.api_url.as_str().trim_end_matches('/'),
            self.repository.owner,
            self.repository.name,
            id,
            suffix
        )
    }

    async fn decode<T: DeserializeOwned>(response: Response, what: String) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(TrackerError::NotFound { what });
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(TrackerError::Status { status, message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl IssueTracker for GitHubClient {
    async fn get_article(&self, id: u64) -> Result<Article> {
        let url = self.issue_url(id, "");
        tracing::debug!(%url, "fetching article");

        let response = self.http.get(&url).send().await?;
        Self::decode(response, format!("Article {}", id)).await
    }

    async fn list_comments(&self, query: &PaginationQuery) -> Result<Vec<Comment>> {
        let url = self.issue_url(query.article, "/comments");
        tracing::debug!(%url, page = query.page, per_page = query.page_size.get(), "fetching comments");

        let response = self
            .http
            .get(&url)
            .query(&[("page", query.page), ("per_page", query.page_size.get())])
            .send()
            .await?;

        let mut comments: Vec<Comment> = Self::decode(
            response,
            format!("Comments page {} of article {}", query.page, query.article),
        )
        .await?;
        comments.truncate(query.page_size.get() as usize);
        Ok(comments)
    }
}
