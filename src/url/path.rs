//! Path splitting and URL joining.

use tracing::trace;

use crate::types::UrlOptions;
use crate::url::grammar::{scan, scheme, RawComponents};
use crate::url::stringify::stringify;

/// Split a URL or path into its segments.
///
/// For a path, one leading and one trailing `/` are dropped before splitting, so
/// `"/"` and `""` give no segments while interior `//` gives an empty segment. For a URL
/// with a scheme, `scheme://authority` becomes the first segment and the rest is split as
/// written; query and fragment stay attached to the last segment.
///
/// # Examples
///
/// ```
/// use urlkit::split;
///
/// assert_eq!(split("/foo//bar/index.php/"), vec!["foo", "", "bar", "index.php"]);
/// assert_eq!(
///     split("http://localhost:3000/test/index.php?id=36&a=b#top"),
///     vec!["http://localhost:3000", "test", "index.php?id=36&a=b#top"]
/// );
/// ```
pub fn split(url: &str) -> Vec<String> {
    let (protocol, rest) = scheme(url);

    if protocol.is_empty() {
        return split_path(url);
    }

    let mut segments: Vec<String> = rest.split('/').map(str::to_string).collect();
    if let Some(first) = segments.first_mut() {
        *first = format!("{protocol}//{first}");
    }
    segments
}

/// Split a path into segments without looking for a scheme.
///
/// ```
/// use urlkit::split_path;
///
/// assert!(split_path("/").is_empty());
/// assert_eq!(split_path("localhost:3000/User//"), vec!["localhost:3000", "User", ""]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        return Vec::new();
    }

    path.split('/').map(str::to_string).collect()
}

/// Accumulated state while folding fragments into one URL.
struct Joined<'a> {
    base: RawComponents<'a>,
    segments: Vec<String>,
    search: &'a str,
    hash: &'a str,
}

impl<'a> Joined<'a> {
    fn new(base: RawComponents<'a>) -> Self {
        Self {
            segments: split_path(base.pathname),
            search: base.search,
            hash: base.hash,
            base,
        }
    }

    fn append(mut self, next: RawComponents<'a>) -> Self {
        self.segments.extend(split_path(next.pathname));
        self.search = next.search;
        self.hash = next.hash;
        self
    }

    fn into_options(self) -> UrlOptions {
        UrlOptions::new()
            .protocol(self.base.protocol)
            .username(self.base.username)
            .password(self.base.password)
            .hostname(self.base.hostname)
            .port(self.base.port)
            .pathname(self.segments.join("/"))
            .search(self.search)
            .hash(self.hash)
    }
}

/// Join URL and path fragments into a single URL.
///
/// Scheme, credentials and host come from the first fragment. Path segments from every
/// fragment are concatenated, and query and fragment are taken from the last one. No
/// fragments at all gives `"/"`.
///
/// # Examples
///
/// ```
/// use urlkit::join;
///
/// assert_eq!(
///     join(["/foo//bar/index.php/", "/api/User/[userId]/"]),
///     "/foo//bar/index.php/api/User/[userId]"
/// );
/// assert_eq!(
///     join(["http://test.com/v1/", "/users", "?page=2"]),
///     "http://test.com/v1/users?page=2"
/// );
/// ```
pub fn join<I, S>(urls: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls: Vec<S> = urls.into_iter().collect();

    let Some((first, rest)) = urls.split_first() else {
        return "/".to_string();
    };

    let joined = rest
        .iter()
        .map(|url| scan(url.as_ref()))
        .fold(Joined::new(scan(first.as_ref())), Joined::append);

    let result = stringify(&joined.into_options());
    trace!(fragments = urls.len(), result = %result, "joined url");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty() {
        assert!(split("").is_empty());
        assert!(split("/").is_empty());
        assert!(split("//").is_empty());
    }

    #[test]
    fn test_split_paths() {
        let cases = vec![
            ("/foo//bar/index.php", vec!["foo", "", "bar", "index.php"]),
            ("/foo//bar/index.php/", vec!["foo", "", "bar", "index.php"]),
            ("/api/User/[userId]", vec!["api", "User", "[userId]"]),
            ("relative/path", vec!["relative", "path"]),
        ];

        for (input, expected) in cases {
            assert_eq!(split(input), expected, "split failed for: {}", input);
        }
    }

    #[test]
    fn test_split_partial_urls() {
        assert_eq!(split("www.example.com/index.php"), vec!["www.example.com", "index.php"]);
        assert_eq!(split("localhost:3000/User//"), vec!["localhost:3000", "User", ""]);
    }

    #[test]
    fn test_split_full_urls() {
        assert_eq!(
            split("http://localhost:3000/test/index.php?id=36&a=b#top"),
            vec!["http://localhost:3000", "test", "index.php?id=36&a=b#top"]
        );
        assert_eq!(split("https://example.com"), vec!["https://example.com"]);
        assert_eq!(split("https://example.com/"), vec!["https://example.com", ""]);
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join(Vec::<&str>::new()), "/");
        assert_eq!(join([""]), "/");
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(
            join(["/foo//bar/index.php/", "/api/User/[userId]/"]),
            "/foo//bar/index.php/api/User/[userId]"
        );
        assert_eq!(
            join(["http://test.com/foo//bar/index.php/", "/api/User/[userId]/"]),
            "http://test.com/foo//bar/index.php/api/User/[userId]"
        );
    }

    #[test]
    fn test_join_ignores_later_hosts() {
        assert_eq!(
            join(["/foo//bar/index.php/", "http://api/User/[userId]/"]),
            "/foo//bar/index.php/User/[userId]"
        );
    }

    #[test]
    fn test_join_last_fragment_wins_tail() {
        assert_eq!(
            join([
                "http://a:b@localhost:3000/test/index.php?id=36&a=b#top",
                "https://nodejs.org/api/http.html/#http_http_request_url_options_callback",
                "/foo//bar/index.php/?foo=bar",
            ]),
            "http://a:b@localhost:3000/test/index.php/api/http.html/foo//bar/index.php?foo=bar"
        );
    }

    #[test]
    fn test_join_single_fragment_keeps_tail() {
        assert_eq!(
            join(["https://example.com/docs/?page=1#intro"]),
            "https://example.com/docs?page=1#intro"
        );
    }

    #[test]
    fn test_join_accepts_owned_strings() {
        let fragments = vec!["/a".to_string(), "b/".to_string()];
        assert_eq!(join(&fragments), "/a/b");
    }
}
