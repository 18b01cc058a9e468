//! Label chip component

use maud::{Markup, html};

use crate::model::Label;

/// Renders label as a link to the label filtered article list.
///
/// # Arguments
///
/// * `label`: Label to display
/// * `href`: Link target, typically built by the page from the label name
pub fn label_item(label: &Label, href: &str) -> Markup {
    html! {
        a class="label-item" href=(href) data-label-id=(label.id) {
            i class="ph ph-tag" {}
            span { (label.name) }
        }
    }
}
