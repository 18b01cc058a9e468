//! Issue tracker access.
//!
//! Articles are GitHub issues and comments are issue comments. Views only
//! depend on the `IssueTracker` trait; `GitHubClient` implements it over the
//! REST API.

mod client;
mod error;

pub use client::{DEFAULT_API_URL, GitHubClient, Repository};
pub use error::{Result, TrackerError};

use crate::model::{Article, Comment};
use crate::pagination::PaginationQuery;

/// Read access to articles and their comments.
#[async_trait::async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches a single article by issue number.
    async fn get_article(&self, id: u64) -> Result<Article>;

    /// Fetches one page of comments for an article.
    ///
    /// The returned list never holds more than `query.page_size` comments.
    async fn list_comments(&self, query: &PaginationQuery) -> Result<Vec<Comment>>;
}
