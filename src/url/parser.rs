//! URL decomposition into [`ParsedUrl`].

use crate::error::UrlError;
use crate::types::ParsedUrl;
use crate::url::grammar::scan;
use crate::url::query::parse_query;
use crate::url::stringify::{host_with_port, scheme_prefix, userinfo};

/// Parse a full or partial URL into its components.
///
/// Malformed and partial input is never rejected: missing components come back empty and
/// a missing path becomes `/`. `host`, `origin` and `href` are rebuilt from the captured
/// components, and the query is decoded into `search_params`.
///
/// # Examples
///
/// ```
/// use urlkit::parse;
///
/// let url = parse("http://localhost:3000/test/index.php?id=36&a=b#top").unwrap();
/// assert_eq!(url.protocol(), "http:");
/// assert_eq!(url.host(), "localhost:3000");
/// assert_eq!(url.pathname(), "/test/index.php");
/// assert_eq!(url.search(), "?id=36&a=b");
/// assert_eq!(url.hash(), "#top");
/// assert_eq!(url.query_value("id"), Some("36"));
///
/// let bare = parse("localhost:3000").unwrap();
/// assert_eq!(bare.protocol(), "");
/// assert_eq!(bare.hostname(), "localhost");
/// assert_eq!(bare.port(), "3000");
/// assert_eq!(bare.href(), "localhost:3000/");
/// ```
///
/// # Errors
///
/// Only decoding the query can fail; see [`parse_query`](crate::parse_query).
pub fn parse(url: &str) -> Result<ParsedUrl, UrlError> {
    let raw = scan(url);

    let pathname = if raw.pathname.is_empty() {
        "/"
    } else {
        raw.pathname
    };
    let host = host_with_port(raw.hostname, raw.port);
    let scheme = scheme_prefix(raw.protocol);
    let origin = format!("{scheme}{host}");
    let href = format!(
        "{scheme}{}{host}{pathname}{}{}",
        userinfo(raw.username, raw.password),
        raw.search,
        raw.hash
    );
    let search_params = parse_query(raw.search)?;

    Ok(ParsedUrl {
        protocol: raw.protocol.to_string(),
        username: raw.username.to_string(),
        password: raw.password.to_string(),
        hostname: raw.hostname.to_string(),
        port: raw.port.to_string(),
        host,
        pathname: pathname.to_string(),
        search: raw.search.to_string(),
        hash: raw.hash.to_string(),
        origin,
        href,
        search_params,
    })
}
