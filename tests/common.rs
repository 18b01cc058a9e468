//! Shared test utilities for integration tests.
//!
//! Provides GitHub API payload builders and wiremock helpers used across
//! multiple test files.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER: &str = "owner";
pub const REPO: &str = "blog";

/// Builds issue payload as returned by `GET /repos/{owner}/{repo}/issues/{n}`.
pub fn issue_json(number: u64, title: &str, comments: u64) -> Value {
    json!({
        "id": 900_000 + number,
        "number": number,
        "title": title,
        "body": "Intro\n\n```rust\nfn main() {}\n```\n",
        "state": "open",
        "created_at": "2024-03-01T08:30:00Z",
        "updated_at": "2024-03-01T09:00:00Z",
        "labels": [
            {"id": 1, "name": "rust", "color": "dea584", "default": false},
            {"id": 2, "name": "web", "color": "ededed", "default": false}
        ],
        "comments": comments,
        "html_url": format!("https://github.com/{}/{}/issues/{}", OWNER, REPO, number),
        "user": {"login": OWNER, "avatar_url": "", "html_url": format!("https://github.com/{}", OWNER)}
    })
}

/// Builds issue comment payload.
pub fn comment_json(id: u64, login: &str, association: &str) -> Value {
    json!({
        "id": id,
        "body": format!("Comment {} by {}", id, login),
        "created_at": "2024-03-02T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z",
        "author_association": association,
        "user": {
            "login": login,
            "id": id,
            "avatar_url": format!("https://avatars.example/{}", login),
            "html_url": format!("https://github.com/{}", login),
            "type": "User"
        }
    })
}

/// Path of an issue on the mock server.
pub fn issue_path(number: u64) -> String {
    format!("/repos/{}/{}/issues/{}", OWNER, REPO, number)
}

/// Mounts successful article response.
pub async fn mount_article(server: &MockServer, issue: Value) {
    let number = issue["number"].as_u64().unwrap_or_default();
    Mock::given(method("GET"))
        .and(path(issue_path(number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue))
        .mount(server)
        .await;
}

/// Mounts 404 for an article.
pub async fn mount_article_not_found(server: &MockServer, number: u64) {
    Mock::given(method("GET"))
        .and(path(issue_path(number)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(server)
        .await;
}

/// Mounts one comments page, matched on `page` and `per_page`.
pub async fn mount_comments(
    server: &MockServer,
    number: u64,
    page: u32,
    per_page: u32,
    comments: Vec<Value>,
) {
    Mock::given(method("GET"))
        .and(path(format!("{}/comments", issue_path(number))))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", per_page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(comments)))
        .expect(1)
        .mount(server)
        .await;
}
