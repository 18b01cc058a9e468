use anyhow::{Context, Result};
use issueblog::{
    ArticleView, Config, GitHubClient, MarkdownRenderer, PaginationState, Translator,
    write_css_assets,
};
use std::fs;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs stderr logging filtered by `RUST_LOG`, defaulting to `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::parse();
    config.validate()?;

    let repository = config.repository()?;
    let location = config.location()?;
    tracing::info!(
        repository = %repository,
        article = config.article,
        url = %location.href(),
        page_size = config.page_size.get(),
        "rendering article"
    );

    let client = GitHubClient::new(config.api_url()?, repository, config.token.as_deref())
        .context("Failed to build GitHub client")?;

    let view = ArticleView::new(
        Arc::new(client),
        location,
        PaginationState::new(config.page_size),
        MarkdownRenderer::new(),
        Translator::new(config.locale),
        config.article,
    );
    view.mount().await;

    if view.article_loader().value().is_none() {
        eprintln!(
            "Warning: Article {} could not be loaded, page has no article section",
            config.article
        );
    }

    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;
    write_css_assets(&config.output.join("assets")).context("Failed to write CSS assets")?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, view.render().into_string())
        .with_context(|| format!("Failed to write page: {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open browser: {:#}", e);
    }

    Ok(())
}
