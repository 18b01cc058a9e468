//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::github::{DEFAULT_API_URL, Repository};
use crate::i18n::Locale;
use crate::location::Location;
use crate::pagination::PageSize;

/// Command line configuration for issueblog.
#[derive(Debug, Clone, Parser)]
#[command(name = "issueblog", version, about, long_about = None)]
pub struct Config {
    /// Repository holding the articles (owner/name)
    #[arg(long)]
    pub repo: String,

    /// Article (issue) number
    #[arg(long)]
    pub article: u64,

    /// Query string of the page, e.g. "?page=2"
    #[arg(long, default_value = "")]
    pub query: String,

    /// Comments per page
    #[arg(long, env = "COMMENT_PAGE_SIZE", default_value_t = PageSize::default())]
    pub page_size: PageSize,

    /// Origin the page is served from
    #[arg(long, default_value = "http://localhost")]
    pub origin: String,

    /// Path of article pages, the article number is appended
    #[arg(long, default_value = "/article/")]
    pub base_path: String,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// GitHub token for higher rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Interface language
    #[arg(long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if repository, origin, or API URL is malformed.
    pub fn validate(&self) -> Result<()> {
        self.repository()?;
        self.location()?;
        self.api_url()?;

        if !self.base_path.starts_with('/') {
            bail!("Base path must start with '/': {}", self.base_path);
        }

        Ok(())
    }

    /// Returns repository parsed from `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns error if the value is not of the form `owner/name`.
    pub fn repository(&self) -> Result<Repository> {
        self.repo
            .parse()
            .with_context(|| format!("Invalid --repo value: {}", self.repo))
    }

    /// Returns API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse.
    pub fn api_url(&self) -> Result<Url> {
        Url::parse(&self.api_url).with_context(|| format!("Invalid API URL: {}", self.api_url))
    }

    /// Returns location of the article page being rendered.
    ///
    /// # Errors
    ///
    /// Returns error if origin is not an absolute URL with host.
    pub fn location(&self) -> Result<Location> {
        let origin = Location::parse(&self.origin)
            .with_context(|| format!("Invalid origin: {}", self.origin))?;
        let pathname = format!("{}{}", self.base_path, self.article);
        Ok(Location::new(origin.origin(), pathname, &self.query))
    }
}
