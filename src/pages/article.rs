//! Article page with paginated comments
//!
//! The page owns one loader per data source and the current location. Data
//! flows one way: a page change rewrites the location's query string, and
//! `sync` derives a new pagination query from it and refetches. Renders are
//! pure snapshots of loader state.

use std::sync::{Arc, Mutex};

use maud::{Markup, PreEscaped, html};

use crate::components::comment::comment_item;
use crate::components::label::label_item;
use crate::components::layout::page_wrapper;
use crate::components::pagination::pagination;
use crate::components::skeleton::{article_skeleton, comments_skeleton};
use crate::github::IssueTracker;
use crate::i18n::Translator;
use crate::loader::{ArticleLoader, CommentsLoader, Settled};
use crate::location::Location;
use crate::markdown::MarkdownRenderer;
use crate::model::Article;
use crate::pagination::{PaginationQuery, PaginationState};
use crate::query::{QueryValue, create_query_url};
use crate::util::lock;

/// Stylesheet bundled next to the rendered page.
pub const STYLESHEET: &str = "assets/blog.css";

/// Fragment of the tracker's issue page holding the comment form.
const NEW_COMMENT_FRAGMENT: &str = "#new_comment_field";

/// What a `sync` call refetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Inputs unchanged; nothing fetched.
    Unchanged,
    /// Pagination changed; comments refetched.
    Comments,
    /// Target article changed; article and comments refetched.
    All,
}

/// Article page composing article and comment loaders.
pub struct ArticleView<'r> {
    tracker: Arc<dyn IssueTracker>,
    location: Mutex<Location>,
    target: Mutex<u64>,
    applied: Mutex<Option<PaginationQuery>>,
    pagination: PaginationState,
    article: ArticleLoader,
    comments: CommentsLoader,
    renderer: MarkdownRenderer<'r>,
    translator: Translator,
}

impl<'r> ArticleView<'r> {
    pub fn new(
        tracker: Arc<dyn IssueTracker>,
        location: Location,
        pagination: PaginationState,
        renderer: MarkdownRenderer<'r>,
        translator: Translator,
        article_id: u64,
    ) -> Self {
        Self {
            tracker,
            location: Mutex::new(location),
            target: Mutex::new(article_id),
            applied: Mutex::new(None),
            pagination,
            article: ArticleLoader::new(),
            comments: CommentsLoader::new(),
            renderer,
            translator,
        }
    }

    /// Identifier of the article this page shows.
    pub fn article_id(&self) -> u64 {
        *lock(&self.target)
    }

    pub fn location(&self) -> Location {
        lock(&self.location).clone()
    }

    /// Pagination query derived from the current location and target.
    pub fn query(&self) -> PaginationQuery {
        let location = lock(&self.location);
        self.pagination.resolve(self.article_id(), &location)
    }

    pub fn article_loader(&self) -> &ArticleLoader {
        &self.article
    }

    pub fn comments_loader(&self) -> &CommentsLoader {
        &self.comments
    }

    /// Loads article and first comment page concurrently.
    pub async fn mount(&self) {
        let query = self.query();
        *lock(&self.applied) = Some(query);
        self.load_all(query).await;
    }

    /// Refetches whatever the current location invalidated.
    ///
    /// A changed target article reloads both loaders; a changed page or page
    /// size reloads comments only.
    pub async fn sync(&self) -> Refresh {
        let query = self.query();
        let previous = lock(&self.applied).replace(query);

        match previous {
            Some(prev) if prev == query => Refresh::Unchanged,
            Some(prev) if prev.article == query.article => {
                self.load_comments(query).await;
                Refresh::Comments
            }
            _ => {
                self.load_all(query).await;
                Refresh::All
            }
        }
    }

    async fn load_all(&self, query: PaginationQuery) {
        tokio::join!(self.load_article(query.article), self.load_comments(query));
    }

    async fn load_article(&self, id: u64) -> Settled {
        tracing::debug!(article = id, "loading article");
        self.article.run(self.tracker.get_article(id)).await
    }

    async fn load_comments(&self, query: PaginationQuery) -> Settled {
        tracing::debug!(
            article = query.article,
            page = query.page,
            page_size = query.page_size.get(),
            "loading comments"
        );
        self.comments.run(self.tracker.list_comments(&query)).await
    }

    /// Requests navigation to a comment page.
    ///
    /// Rewrites the location's query string and returns the new one. Nothing
    /// is fetched until the next `sync`.
    pub fn change_page(&self, page: u32) -> String {
        let search = create_query_url(&[("page", QueryValue::from(page))]);
        lock(&self.location).replace_query(&search);
        search
    }

    /// Switches the page to another article, starting at its first page.
    pub fn navigate_to_article(&self, id: u64) {
        *lock(&self.target) = id;
        lock(&self.location).replace_query("");
    }

    /// Link to the tracker's comment form for the resolved article.
    pub fn new_comment_url(&self) -> String {
        self.article
            .value()
            .map(|article| new_comment_url(&article))
            .unwrap_or_default()
    }

    /// Link to the article list filtered by a label.
    pub fn label_link(&self, label: &str) -> String {
        label_link(label)
    }

    /// Renders the page from current loader state.
    pub fn render(&self) -> Markup {
        let article = self.article.snapshot();
        let comments = self.comments.snapshot();
        let query = self.query();
        let location = self.location();
        let t = &self.translator;

        let title = article
            .value
            .as_ref()
            .map(|a| a.title.as_str())
            .unwrap_or_default();
        let new_comment = article
            .value
            .as_ref()
            .map(new_comment_url)
            .unwrap_or_default();
        let total = article.value.as_ref().map_or(0, |a| a.comments);

        page_wrapper(
            self.translator.locale().tag(),
            title,
            &[STYLESHEET],
            html! {
                article class="article" {
                    @if article.is_loading() {
                        (article_skeleton())
                    }
                    @if let Some(a) = &article.value {
                        h2 class="article-title" { (a.title) }
                        div class="article-info" {
                            span class="article-date" { (t.format_date(&a.created_at)) }
                            span class="article-labels" {
                                @for label in &a.labels {
                                    (label_item(label, &label_link(&label.name)))
                                }
                            }
                            span class="article-comments" {
                                i class="ph ph-chat-circle" {}
                                span { (a.comments) }
                            }
                        }
                        div class="markdown-body" {
                            (PreEscaped(self.renderer.render_or_escape(&a.body, true)))
                        }
                    }
                }

                section class="comments" {
                    h2 class="comments-title" { (t.t("comment.title")) }
                    a class="comment-button" href=(new_comment) { (t.t("comment.btn")) }
                    @if comments.is_loading() {
                        (comments_skeleton())
                    }
                    @if let Some(list) = comments.value.as_ref().filter(|l| !l.is_empty()) {
                        div class="comment-list" {
                            @for comment in list {
                                (comment_item(comment, &location, &self.renderer, t))
                            }
                        }
                    }
                    div class="comments-foot" {
                        (pagination(query.page, query.page_size, total))
                    }
                }
            },
        )
    }
}

fn new_comment_url(article: &Article) -> String {
    format!("{}{}", article.html_url, NEW_COMMENT_FRAGMENT)
}

fn label_link(label: &str) -> String {
    format!(
        "../{}",
        create_query_url(&[("label", QueryValue::from(label)), ("page", QueryValue::Number(1))])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Result, TrackerError};
    use crate::i18n::Locale;
    use crate::loader::LoadState;
    use crate::model::{AuthorAssociation, Comment, Label, User};
    use crate::pagination::PageSize;
    use chrono::{TimeZone, Utc};
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Article(u64),
        Comments(PaginationQuery),
    }

    #[derive(Default)]
    struct FakeTracker {
        missing_article: bool,
        comments: Vec<Comment>,
        calls: Mutex<Vec<Call>>,
        comments_gate: Mutex<Option<oneshot::Receiver<()>>>,
    }

    impl FakeTracker {
        fn calls(&self) -> Vec<Call> {
            lock(&self.calls).clone()
        }
    }

    #[async_trait::async_trait]
    impl IssueTracker for FakeTracker {
        async fn get_article(&self, id: u64) -> Result<Article> {
            lock(&self.calls).push(Call::Article(id));
            if self.missing_article {
                return Err(TrackerError::NotFound {
                    what: format!("Article {}", id),
                });
            }
            Ok(article(id))
        }

        async fn list_comments(&self, query: &PaginationQuery) -> Result<Vec<Comment>> {
            lock(&self.calls).push(Call::Comments(*query));
            let gate = lock(&self.comments_gate).take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(self.comments.clone())
        }
    }

    fn article(id: u64) -> Article {
        Article {
            id,
            title: format!("Article {}", id),
            body: "Hello\n\n```rust\nfn main() {}\n```\n".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2024, 3, 1, 8, 30, 0)
                .single()
                .expect("Valid timestamp"),
            labels: vec![Label {
                id: 1,
                name: "rust".to_string(),
            }],
            comments: 25,
            html_url: format!("https://github.com/owner/blog/issues/{}", id),
        }
    }

    fn comment(id: u64, login: &str, association: AuthorAssociation) -> Comment {
        Comment {
            id,
            body: format!("Comment by {}", login),
            created_at: Utc
                .with_ymd_and_hms(2024, 3, 2, 10, 0, 0)
                .single()
                .expect("Valid timestamp"),
            user: User {
                login: login.to_string(),
                avatar_url: format!("https://avatars.example/{}", login),
                html_url: format!("https://github.com/{}", login),
            },
            author_association: association,
        }
    }

    fn view(tracker: Arc<FakeTracker>, search: &str) -> ArticleView<'static> {
        ArticleView::new(
            tracker,
            Location::new("https://blog.example.com", "/article/42", search),
            PaginationState::new(PageSize::new(10).expect("Non-zero")),
            MarkdownRenderer::new(),
            Translator::new(Locale::En),
            42,
        )
    }

    fn page_query(page: u32) -> PaginationQuery {
        PaginationQuery {
            article: 42,
            page,
            page_size: PageSize::new(10).expect("Non-zero"),
        }
    }

    #[tokio::test]
    async fn test_mount_requests_first_page_with_default_size() {
        // Arrange
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker.clone(), "");

        // Act
        page.mount().await;

        // Assert
        let calls = tracker.calls();
        assert!(calls.contains(&Call::Article(42)));
        assert!(calls.contains(&Call::Comments(page_query(1))));
        assert_eq!(calls.len(), 2);
    }

    #[tokio::test]
    async fn test_comment_skeleton_until_fetch_resolves() {
        // Arrange
        let (open_gate, gate) = oneshot::channel();
        let tracker = Arc::new(FakeTracker {
            comments: vec![comment(1, "alice", AuthorAssociation::Owner)],
            comments_gate: Mutex::new(Some(gate)),
            ..FakeTracker::default()
        });
        let page = view(tracker, "");

        // Act
        let (during, ()) = tokio::join!(
            async {
                tokio::task::yield_now().await;
                let html = page.render().into_string();
                let _ = open_gate.send(());
                html
            },
            page.mount()
        );
        let after = page.render().into_string();

        // Assert
        assert!(
            during.contains("comments-skeleton"),
            "Should show skeleton while loading"
        );
        assert!(!after.contains("comments-skeleton"));
        assert!(after.contains("Comment by alice"));
    }

    #[tokio::test]
    async fn test_change_page_navigates_without_fetching() {
        // Arrange
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker.clone(), "");
        page.mount().await;

        // Act
        let target = page.change_page(3);

        // Assert
        assert_eq!(target, "?page=3");
        assert_eq!(page.location().search(), "?page=3");
        assert_eq!(tracker.calls().len(), 2, "Navigation alone must not fetch");
        assert_eq!(page.query(), page_query(3));
    }

    #[tokio::test]
    async fn test_sync_after_page_change_refetches_comments_only() {
        // Arrange
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker.clone(), "");
        page.mount().await;
        page.change_page(2);

        // Act
        let refresh = page.sync().await;
        let again = page.sync().await;

        // Assert
        assert_eq!(refresh, Refresh::Comments);
        assert_eq!(again, Refresh::Unchanged);
        assert_eq!(
            tracker.calls().last(),
            Some(&Call::Comments(page_query(2)))
        );
        assert_eq!(tracker.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_navigate_to_article_reloads_both() {
        // Arrange
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker.clone(), "?page=2");
        page.mount().await;

        // Act
        page.navigate_to_article(7);
        let refresh = page.sync().await;

        // Assert
        assert_eq!(refresh, Refresh::All);
        let calls = tracker.calls();
        assert!(calls.contains(&Call::Article(7)));
        assert!(calls.contains(&Call::Comments(PaginationQuery {
            article: 7,
            page: 1,
            page_size: PageSize::new(10).expect("Non-zero"),
        })));
        assert_eq!(page.article_loader().value().map(|a| a.id), Some(7));
    }

    #[tokio::test]
    async fn test_sync_before_mount_loads_everything() {
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker.clone(), "");
        assert_eq!(page.sync().await, Refresh::All);
        assert_eq!(tracker.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_render_resolved_article() {
        // Arrange
        let tracker = Arc::new(FakeTracker {
            comments: vec![
                comment(1, "alice", AuthorAssociation::Owner),
                comment(2, "bob", AuthorAssociation::None),
            ],
            ..FakeTracker::default()
        });
        let page = view(tracker, "?page=2");
        page.mount().await;

        // Act
        let html = page.render().into_string();

        // Assert
        assert!(html.contains("<title>Article 42 - Blog</title>"));
        assert!(html.contains("March 1, 2024"));
        assert!(html.contains("href=\"../?label=rust&amp;page=1\""));
        assert!(html.contains("class=\"playground\""), "Article body uses playground");
        assert!(html.contains(
            "href=\"https://github.com/owner/blog/issues/42#new_comment_field\""
        ));
        assert_eq!(html.matches("class=\"owner-tag\"").count(), 1);
        assert!(html.contains("aria-current=\"page\">2<"), "{}", html);
        assert!(!html.contains("skeleton"));
    }

    #[tokio::test]
    async fn test_missing_article_renders_nothing_for_section() {
        // Arrange
        let tracker = Arc::new(FakeTracker {
            missing_article: true,
            ..FakeTracker::default()
        });
        let page = view(tracker, "");

        // Act
        page.mount().await;
        let html = page.render().into_string();

        // Assert
        assert_eq!(page.article_loader().state(), LoadState::Loaded);
        assert!(page.article_loader().value().is_none());
        assert!(!html.contains("article-title"));
        assert!(!html.contains("article-skeleton"));
        assert!(html.contains("class=\"comment-button\" href=\"\""));
        assert!(!html.contains("class=\"pagination\""), "No total without article");
    }

    #[test]
    fn test_label_link() {
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker, "");
        assert_eq!(page.label_link("good first"), "../?label=good+first&page=1");
    }

    #[test]
    fn test_new_comment_url_empty_until_resolved() {
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker, "");
        assert_eq!(page.new_comment_url(), "");
    }

    #[test]
    fn test_render_before_mount_is_idle() {
        let tracker = Arc::new(FakeTracker::default());
        let page = view(tracker, "");
        let html = page.render().into_string();
        assert!(!html.contains("skeleton"), "Idle loaders show no placeholders");
        assert!(html.contains("Comments"));
    }
}
