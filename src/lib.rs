//! Blog article pages rendered from GitHub issues.

mod assets;
pub mod avatar;
pub mod components;
mod config;
pub mod github;
mod highlight;
pub mod i18n;
pub mod loader;
pub mod location;
mod markdown;
pub mod model;
pub mod pages;
pub mod pagination;
pub mod query;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use github::{GitHubClient, IssueTracker, Repository, TrackerError};
pub use highlight::{Grammar, GrammarRegistry};
pub use i18n::{Locale, Translator};
pub use loader::{ArticleLoader, CommentsLoader, LoadState, Loader, Settled, Snapshot, Ticket};
pub use location::Location;
pub use markdown::MarkdownRenderer;
pub use model::{Article, AuthorAssociation, Comment, Label, User};
pub use pages::article::{ArticleView, Refresh};
pub use pagination::{PageSize, PaginationQuery, PaginationState};
pub use query::{QueryValue, create_query_url};
pub use util::{clamp, format_datetime};
