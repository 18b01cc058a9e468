//! Query string encoding and decoding.
//!
//! Navigation state lives in the query string. Builders drop absent
//! parameters instead of encoding them as empty values, which keeps links
//! such as `?page=2` canonical regardless of which optional filters the
//! caller has at hand.

use url::form_urlencoded;

/// Value of a single query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue<'a> {
    Text(&'a str),
    Number(i64),
    Absent,
}

impl<'a> From<&'a str> for QueryValue<'a> {
    fn from(value: &'a str) -> Self {
        QueryValue::Text(value)
    }
}

impl<'a> From<&'a String> for QueryValue<'a> {
    fn from(value: &'a String) -> Self {
        QueryValue::Text(value.as_str())
    }
}

impl From<i64> for QueryValue<'_> {
    fn from(value: i64) -> Self {
        QueryValue::Number(value)
    }
}

impl From<u32> for QueryValue<'_> {
    fn from(value: u32) -> Self {
        QueryValue::Number(i64::from(value))
    }
}

impl<'a, T: Into<QueryValue<'a>>> From<Option<T>> for QueryValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

/// Builds a query string from named parameters.
///
/// Parameters keep their input order. Absent values are omitted entirely and
/// numbers are written in decimal form. The result always starts with `?`,
/// so an empty mapping yields exactly `?`.
///
/// # Examples
///
/// ```
/// use issueblog::query::{QueryValue, create_query_url};
///
/// let url = create_query_url(&[("page", QueryValue::Number(2)), ("label", QueryValue::Absent)]);
/// assert_eq!(url, "?page=2");
/// ```
pub fn create_query_url(params: &[(&str, QueryValue<'_>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    for (key, value) in params {
        match value {
            QueryValue::Text(text) => {
                serializer.append_pair(key, text);
            }
            QueryValue::Number(number) => {
                serializer.append_pair(key, &number.to_string());
            }
            QueryValue::Absent => {}
        }
    }
    serializer.finish()
}

/// Decodes a query string into name/value pairs.
///
/// Accepts input with or without the leading `?`.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let raw = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Returns the first value for `name`, if present.
pub fn first(search: &str, name: &str) -> Option<String> {
    parse_query(search)
        .into_iter()
        .find_map(|(k, v)| (k == name).then_some(v))
}
