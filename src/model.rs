//! Article and comment models decoded from GitHub issue payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Issue label attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
}

/// Comment author as exposed by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
}

/// Relationship of a comment author to the hosting repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorAssociation {
    Owner,
    Member,
    Collaborator,
    Contributor,
    FirstTimer,
    FirstTimeContributor,
    Mannequin,
    #[default]
    None,
    Other(String),
}

impl AuthorAssociation {
    /// Returns true for the repository owner sentinel only.
    pub fn is_owner(&self) -> bool {
        matches!(self, AuthorAssociation::Owner)
    }

    fn from_wire(value: &str) -> Self {
        match value {
            "OWNER" => AuthorAssociation::Owner,
            "MEMBER" => AuthorAssociation::Member,
            "COLLABORATOR" => AuthorAssociation::Collaborator,
            "CONTRIBUTOR" => AuthorAssociation::Contributor,
            "FIRST_TIMER" => AuthorAssociation::FirstTimer,
            "FIRST_TIME_CONTRIBUTOR" => AuthorAssociation::FirstTimeContributor,
            "MANNEQUIN" => AuthorAssociation::Mannequin,
            "NONE" => AuthorAssociation::None,
            other => AuthorAssociation::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for AuthorAssociation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(AuthorAssociation::from_wire)
            .unwrap_or_default())
    }
}

/// Blog article backed by a tracker issue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    #[serde(rename = "number")]
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub comments: u64,
    pub html_url: String,
}

/// Reply on an article backed by an issue comment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub user: User,
    #[serde(default)]
    pub author_association: AuthorAssociation,
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
