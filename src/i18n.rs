//! Display text lookup per locale.

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::util::format_datetime;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// BCP 47 tag for the `lang` attribute.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh-CN",
        }
    }
}

/// Translates message keys into display text for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns display text for `key`, or the key itself when unknown.
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        match (self.locale, key) {
            (Locale::En, "comment.owner") => "Owner",
            (Locale::En, "comment.title") => "Comments",
            (Locale::En, "comment.btn") => "Leave a comment",
            (Locale::En, "dateFormat") => "%B %-d, %Y",
            (Locale::Zh, "comment.owner") => "作者",
            (Locale::Zh, "comment.title") => "评论",
            (Locale::Zh, "comment.btn") => "发表评论",
            (Locale::Zh, "dateFormat") => "%Y年%m月%d日",
            _ => key,
        }
    }

    /// Formats article date with the locale's `dateFormat` pattern.
    pub fn format_date(&self, timestamp: &DateTime<Utc>) -> String {
        format_datetime(timestamp, self.t("dateFormat"))
    }
}
