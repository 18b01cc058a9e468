//! Comment display component

use maud::{Markup, PreEscaped, html};

use crate::avatar;
use crate::i18n::Translator;
use crate::location::Location;
use crate::markdown::MarkdownRenderer;
use crate::model::Comment;
use crate::util::{COMMENT_TIME_FORMAT, format_datetime};

/// Size in pixels of comment avatars.
const AVATAR_SIZE: u32 = 32;

/// Renders one comment with author header and markdown body.
///
/// The header links the author's profile, shows an owner badge when the
/// author owns the repository, and links the timestamp to this comment on
/// the current page. Authors without an avatar URL get a generated avatar.
pub fn comment_item(
    comment: &Comment,
    location: &Location,
    renderer: &MarkdownRenderer<'_>,
    translator: &Translator,
) -> Markup {
    let created_at = format_datetime(&comment.created_at, COMMENT_TIME_FORMAT);
    let link = location.fragment_link(comment.id);
    let body = renderer.render_or_escape(&comment.body, false);

    html! {
        div class="comment-item" id=(comment.id) {
            div class="comment-avatar" {
                @if comment.user.avatar_url.is_empty() {
                    (avatar::render(&comment.user.login, AVATAR_SIZE))
                } @else {
                    img src=(comment.user.avatar_url) alt="Avatar" width=(AVATAR_SIZE) height=(AVATAR_SIZE);
                }
            }
            header class="comment-header" {
                a class="comment-author" href=(comment.user.html_url) { (comment.user.login) }
                @if comment.author_association.is_owner() {
                    span class="owner-tag" { (translator.t("comment.owner")) }
                }
                a class="comment-time" href=(link) { (created_at) }
            }
            div class="markdown-body" {
                (PreEscaped(body))
            }
        }
    }
}
