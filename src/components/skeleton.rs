//! Loading placeholders

use maud::{Markup, html};

/// Number of comment placeholders shown while a page of comments loads.
pub const COMMENT_SKELETON_COUNT: usize = 5;

/// Widths of the paragraph bars shown while an article loads.
const PARAGRAPH_WIDTHS: &[&str] = &[
    "w-1/2", "w-full", "w-4/5", "w-full", "w-3/5", "w-full h-40", "w-4/5", "w-full", "w-3/5",
    "w-full", "w-2/5",
];

/// Renders a single placeholder bar with width modifier classes.
pub fn skeleton(modifiers: &str) -> Markup {
    html! {
        div class=(format!("skeleton {}", modifiers)) aria-hidden="true" {}
    }
}

/// Renders title and paragraph placeholders for an article body.
pub fn article_skeleton() -> Markup {
    html! {
        div class="article-skeleton" {
            (skeleton("h-8 w-1/3"))
            ul class="paragraph-skeleton" {
                @for width in PARAGRAPH_WIDTHS {
                    li { (skeleton(width)) }
                }
            }
        }
    }
}

/// Renders placeholder for one comment.
pub fn comment_skeleton() -> Markup {
    html! {
        div class="comment-skeleton" {
            div class="skeleton skeleton-avatar" aria-hidden="true" {}
            (skeleton("w-1/4"))
            (skeleton("w-full"))
            (skeleton("w-3/5"))
        }
    }
}

/// Renders the placeholder list shown while comments load.
pub fn comments_skeleton() -> Markup {
    html! {
        div class="comments-skeleton" {
            @for _ in 0..COMMENT_SKELETON_COUNT {
                (comment_skeleton())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_skeleton_has_all_paragraphs() {
        let html = article_skeleton().into_string();
        assert_eq!(html.matches("<li>").count(), PARAGRAPH_WIDTHS.len());
        assert!(html.contains("skeleton h-8 w-1/3"));
    }

    #[test]
    fn test_comments_skeleton_count() {
        let html = comments_skeleton().into_string();
        assert_eq!(
            html.matches("class=\"comment-skeleton\"").count(),
            COMMENT_SKELETON_COUNT
        );
    }
}
