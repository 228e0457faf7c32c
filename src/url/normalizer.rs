//! Semantics-preserving URL normalization.
//!
//! See <https://tools.ietf.org/html/rfc3986#section-6.2.2> and
//! <https://en.wikipedia.org/wiki/URI_normalization#Normalizations_that_preserve_semantics>.

use tracing::trace;

use crate::types::UrlOptions;
use crate::url::grammar::scan;
use crate::url::path::split_path;
use crate::url::stringify::stringify;

/// Well-known ports that are dropped when they match the scheme.
const DEFAULT_PORTS: &[(&str, &str)] = &[("http:", "80"), ("https:", "443")];

/// Normalize a URL without changing what it refers to.
///
/// This function:
/// 1. Decodes percent-encoded unreserved characters and upper-cases the remaining triplets
/// 2. Converts scheme and host to lowercase
/// 3. Drops the port when it is the scheme's default
/// 4. Removes `.` and `..` path segments and any trailing `/`
/// 5. Rebuilds the URL, so an empty path becomes `/`
///
/// A scheme-less URL keeps its dot segments when removing them would make the rebuilt
/// string read as having a scheme (`/a:/.//b` would otherwise become `/a://b`).
///
/// The percent-encoding pass runs both before parsing and on the rebuilt string, which
/// makes the result stable: normalizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use urlkit::normalize;
///
/// assert_eq!(
///     normalize("HTTPS://User@Example.COM:443/%7Efoo%2a/./bar/baz/../qux"),
///     "https://User@example.com/~foo%2A/bar/qux"
/// );
/// assert_eq!(normalize("http://example.com:80"), "http://example.com/");
/// ```
pub fn normalize(url: &str) -> String {
    let canonical = normalize_percent_encoding(url);
    let raw = scan(&canonical);

    let protocol = raw.protocol.to_lowercase();
    let hostname = raw.hostname.to_lowercase();
    let port = if is_default_port(&protocol, raw.port) {
        ""
    } else {
        raw.port
    };
    let pathname = if raw.pathname.len() > 1 {
        remove_dot_segments(raw.pathname)
    } else {
        raw.pathname.to_string()
    };

    let options = UrlOptions::new()
        .protocol(protocol.as_str())
        .username(raw.username)
        .password(raw.password)
        .hostname(hostname)
        .port(port)
        .pathname(pathname)
        .search(raw.search)
        .hash(raw.hash);

    let mut rebuilt = stringify(&options);
    if scan(&rebuilt).protocol != protocol {
        trace!(url = %rebuilt, "dot removal exposed a scheme, keeping original path");
        rebuilt = stringify(&options.pathname(raw.pathname));
    }

    let normalized = normalize_percent_encoding(&rebuilt);
    trace!(input = %url, normalized = %normalized, "normalized url");
    normalized
}

fn is_default_port(protocol: &str, port: &str) -> bool {
    DEFAULT_PORTS
        .iter()
        .any(|&(scheme, default)| scheme == protocol && default == port)
}

/// Resolve `.` and `..` segments in a path.
///
/// `.` is dropped and `..` removes the previous kept segment, or nothing if there is none.
/// The segments come from [`split_path`] after every trailing `/` is trimmed, and the
/// result is rejoined with a leading `/` and no trailing `/`. Empty segments in the middle
/// of the path are kept.
///
/// ```
/// use urlkit::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/foo/./bar/baz/../qux"), "/foo/bar/qux");
/// assert_eq!(remove_dot_segments("/../../a"), "/a");
/// assert_eq!(remove_dot_segments("/docs/"), "/docs");
/// ```
pub fn remove_dot_segments(path: &str) -> String {
    let kept = split_path(path.trim_end_matches('/'))
        .into_iter()
        .fold(Vec::new(), |mut kept, segment| {
            match segment.as_str() {
                "." => {}
                ".." => {
                    kept.pop();
                }
                _ => kept.push(segment),
            }
            kept
        });

    // `a//.` folds to `a` and an empty segment
    let joined = kept.join("/");
    format!("/{}", joined.trim_end_matches('/'))
}

/// Canonicalize every `%XX` triplet in `text`.
///
/// A triplet that decodes to an unreserved character (`A-Z a-z 0-9 - . _ ~`) is replaced
/// by that character; any other hex triplet is upper-cased. Triplets that are not valid
/// hex are left as they are. Decoding can expose a new triplet (`%%41` becomes `%A`
/// followed by whatever came next), so the pass repeats until nothing changes.
///
/// ```
/// use urlkit::normalize_percent_encoding;
///
/// assert_eq!(normalize_percent_encoding("%7efoo%2a"), "~foo%2A");
/// ```
pub fn normalize_percent_encoding(text: &str) -> String {
    let mut current = canonicalize_triplets(text);
    loop {
        let next = canonicalize_triplets(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn canonicalize_triplets(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let triplet = bytes[i] == b'%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_alphanumeric)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_alphanumeric);

        if !triplet {
            i += 1;
            continue;
        }

        out.push_str(&text[copied..i]);
        let digits = &text[i + 1..i + 3];

        match u8::from_str_radix(digits, 16) {
            Ok(byte) if is_unreserved(byte) => out.push(char::from(byte)),
            Ok(_) => {
                out.push('%');
                out.push_str(&digits.to_ascii_uppercase());
            }
            Err(_) => out.push_str(&text[i..i + 3]),
        }

        i += 3;
        copied = i;
    }

    out.push_str(&text[copied..]);
    out
}

/// RFC 3986 section 2.3
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}
