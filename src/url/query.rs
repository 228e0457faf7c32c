//! Query string codec.
//!
//! Decoding follows `decodeURIComponent` rules (no `+` to space), encoding follows
//! `encodeURIComponent`, and output pairs are always sorted by key so that the same
//! mapping always serializes to the same string.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::UrlError;
use crate::types::{ParsedQuery, QueryValue};

/// Characters left alone by `encodeURIComponent`: RFC 3986 unreserved plus `!'()*`.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parse a query string into decoded key/value pairs.
///
/// A leading `?` is skipped. Pairs are split on the first `=`; a pair without `=` gets an
/// empty value and empty pairs (`a=1&&b=2`) are ignored. When a key repeats, the last
/// value wins.
///
/// # Examples
///
/// ```
/// use urlkit::parse_query;
///
/// let params = parse_query("?id=36&a=b").unwrap();
/// assert_eq!(params.get("a"), Some(&"b".to_string()));
/// assert_eq!(params.get("id"), Some(&"36".to_string()));
///
/// let decoded = parse_query("a%20b=my%20image.png").unwrap();
/// assert_eq!(decoded.get("a b"), Some(&"my image.png".to_string()));
/// ```
///
/// # Errors
///
/// Returns [`UrlError::MalformedEscape`] or [`UrlError::InvalidUtf8`] when a key or
/// value cannot be percent-decoded.
pub fn parse_query(query: &str) -> Result<ParsedQuery, UrlError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = ParsedQuery::new();

    if query.is_empty() {
        return Ok(params);
    }

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(decode_component(key)?, decode_component(value)?);
    }

    Ok(params)
}

/// Serialize a query mapping into `key=value` pairs joined by `&`, without a leading `?`.
///
/// Pairs are sorted by key. Values that are [`QueryValue::Absent`] or `false` are left out;
/// if nothing survives the result is empty. Keys and values are percent-encoded the way
/// `encodeURIComponent` does it, so a space becomes `%20`.
///
/// # Examples
///
/// ```
/// use urlkit::{stringify_query, QueryValue};
///
/// let query = vec![
///     ("zzz", QueryValue::from(34)),
///     ("foo", QueryValue::from("Hello world!")),
/// ];
/// assert_eq!(stringify_query(query), "foo=Hello%20world!&zzz=34");
/// ```
pub fn stringify_query<I, K, V>(query: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    let sorted: BTreeMap<String, QueryValue> = query
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value.into()))
        .collect();

    sorted
        .iter()
        .filter_map(|(key, value)| value.render().map(|value| (key, value)))
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode a single URI component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

/// Percent-decode a single URI component.
///
/// # Errors
///
/// Fails on a `%` that is not followed by two hex digits, or when the decoded bytes are
/// not UTF-8.
pub fn decode_component(input: &str) -> Result<String, UrlError> {
    if has_malformed_escape(input) {
        debug!(input = %input, "malformed percent-encoding");
        return Err(UrlError::MalformedEscape(input.to_string()));
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| {
            debug!(input = %input, "percent-decoded bytes are not UTF-8");
            UrlError::InvalidUtf8(input.to_string())
        })
}

fn has_malformed_escape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}
