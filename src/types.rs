//! Core data structures for URL decomposition and reconstruction.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::UrlError;

/// Decoded query string: unique keys, iterated in byte order.
pub type ParsedQuery = BTreeMap<String, String>;

/// Query mapping accepted by [`stringify_query`](crate::stringify_query).
pub type Query = BTreeMap<String, QueryValue>;

/// A value on the stringify side of the query codec.
///
/// `Absent` and `Bool(false)` are dropped from the output entirely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QueryValue {
    /// Encoded as-is
    Str(String),
    /// Encoded in decimal
    Int(i64),
    /// Encoded the way a JavaScript number prints (`34`, `1.5`, `1e+21`, `NaN`, `Infinity`)
    Float(f64),
    /// `true` is encoded as `"true"`, `false` is skipped
    Bool(bool),
    /// Skipped
    Absent,
}

impl QueryValue {
    /// Render the value as the text to be percent-encoded, or `None` if the pair is skipped.
    pub fn render(&self) -> Option<String> {
        match self {
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(n) => Some(n.to_string()),
            QueryValue::Float(n) => Some(format_float(*n)),
            QueryValue::Bool(true) => Some("true".to_string()),
            QueryValue::Bool(false) | QueryValue::Absent => None,
        }
    }
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponential(n)
    } else {
        n.to_string()
    }
}

/// `1e21` as `1e+21` and `1.5e-7` as `1.5e-7`.
fn exponential(n: f64) -> String {
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<&QueryValue> for QueryValue {
    fn from(value: &QueryValue) -> Self {
        value.clone()
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        QueryValue::Float(f64::from(value))
    }
}

macro_rules! query_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! query_value_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    // out-of-range values keep their decimal text
                    i64::try_from(value)
                        .map_or_else(|_| QueryValue::Str(value.to_string()), QueryValue::Int)
                }
            }
        )*
    };
}

query_value_from_int!(i8, i16, i32, i64, u8, u16, u32);
query_value_from_wide_int!(isize, u64, usize);

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

/// The structured decomposition of a URL.
///
/// Produced by [`parse`](crate::parse). Every field is always present; absent components
/// are empty strings, except `pathname` which defaults to `"/"`. `host`, `origin`, `href`
/// and `search_params` are derived from the captured components.
///
/// With the `serde` feature, deserializing reads only `href` and parses it again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedUrl {
    pub(crate) protocol: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) hostname: String,
    pub(crate) port: String,
    pub(crate) host: String,
    pub(crate) pathname: String,
    pub(crate) search: String,
    pub(crate) hash: String,
    pub(crate) origin: String,
    pub(crate) href: String,
    pub(crate) search_params: ParsedQuery,
}

impl ParsedUrl {
    /// Scheme including the trailing colon (`"http:"`), or empty.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Host without the port.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Port digits as written, or empty.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// `hostname[":" port]`
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path, always starting with `/`.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string including the leading `?`, or empty.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fragment including the leading `#`, or empty.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// `protocol "//" host`, or `host` alone when there is no scheme.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The full reconstructed URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Decoded query pairs.
    pub fn search_params(&self) -> &ParsedQuery {
        &self.search_params
    }

    /// Look up a single decoded query value.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.search_params.get(key).map(String::as_str)
    }

    pub fn has_query(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }

    pub fn is_https(&self) -> bool {
        self.protocol.eq_ignore_ascii_case("https:")
    }

    /// Every component as a fully populated [`UrlOptions`].
    ///
    /// Since `href` is included, stringifying the result reproduces `href` exactly.
    pub fn to_options(&self) -> UrlOptions {
        UrlOptions {
            hash: Some(self.hash.clone()),
            host: Some(self.host.clone()),
            hostname: Some(self.hostname.clone()),
            href: Some(self.href.clone()),
            origin: Some(self.origin.clone()),
            password: Some(self.password.clone()),
            pathname: Some(self.pathname.clone()),
            port: Some(self.port.clone()),
            protocol: Some(self.protocol.clone()),
            search: Some(self.search.clone()),
            search_params: Some(
                self.search_params
                    .iter()
                    .map(|(k, v)| (k.clone(), QueryValue::Str(v.clone())))
                    .collect(),
            ),
            username: Some(self.username.clone()),
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::url::parser::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ParsedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Href {
            href: String,
        }

        let Href { href } = Href::deserialize(deserializer)?;
        href.parse().map_err(serde::de::Error::custom)
    }
}

/// A partial set of URL components for [`stringify`](crate::stringify).
///
/// Every field is optional. A supplied non-empty `href` wins over everything else.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct UrlOptions {
    pub hash: Option<String>,
    pub host: Option<String>,
    /// May carry an embedded `:port`, which is ignored in favour of `port`.
    pub hostname: Option<String>,
    pub href: Option<String>,
    /// Used to recover scheme and host when neither is otherwise given.
    pub origin: Option<String>,
    pub password: Option<String>,
    pub pathname: Option<String>,
    pub port: Option<String>,
    /// With or without the trailing colon.
    pub protocol: Option<String>,
    /// Takes precedence over `search_params` when present, even if empty.
    pub search: Option<String>,
    pub search_params: Option<Query>,
    pub username: Option<String>,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = Some(pathname.into());
        self
    }

    /// Accepts digits as a string or any integer.
    pub fn port(mut self, port: impl ToString) -> Self {
        self.port = Some(port.to_string());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn search_params(mut self, search_params: Query) -> Self {
        self.search_params = Some(search_params);
        self
    }

    /// Add a single query pair, replacing any previous value for `key`.
    pub fn search_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.search_params
            .get_or_insert_with(Query::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}
