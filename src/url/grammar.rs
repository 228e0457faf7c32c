//! Scanner that splits a URL string into its raw components.
//!
//! The grammar is
//!
//! ```text
//! ( scheme "://" )? ( user ( ":" pass )? "@" )? host? ( ":" port )? ( "/" path )? ( "?" search )? ( "#" hash )?
//! ```
//!
//! Each sub-parser consumes an optional prefix and returns the remainder, in the order
//! scheme, authority, path, query, fragment. Every component is optional, so scanning is
//! total: any input, including the empty string, yields a [`RawComponents`].

/// Borrowed slices of the input, one per grammar component.
///
/// `protocol` keeps its trailing `:`, `search` its leading `?` and `hash` its leading `#`.
/// `pathname` is empty when the input has no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct RawComponents<'a> {
    pub protocol: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub hostname: &'a str,
    pub port: &'a str,
    pub pathname: &'a str,
    pub search: &'a str,
    pub hash: &'a str,
}

/// Scan `input` into its components.
pub(crate) fn scan(input: &str) -> RawComponents<'_> {
    let (protocol, rest) = scheme(input);
    let (authority, rest) = authority(rest);
    let (username, password, host_port) = userinfo(authority);
    let (hostname, port) = host_port.split_once(':').unwrap_or((host_port, ""));
    let (pathname, rest) = path(rest);
    let (search, rest) = query(rest);
    let hash = fragment(rest);

    RawComponents {
        protocol,
        username,
        password,
        hostname,
        port,
        pathname,
        search,
        hash,
    }
}

/// Everything up to the first `:`, but only when that colon is followed by `//`.
///
/// Returns the protocol including its colon and the input after `://`. Without the `//`
/// there is no scheme, which is what keeps `localhost:3000` a host and port.
pub(crate) fn scheme(input: &str) -> (&str, &str) {
    match input.find(':') {
        Some(colon) if input[colon + 1..].starts_with("//") => {
            (&input[..=colon], &input[colon + 3..])
        }
        _ => ("", input),
    }
}

/// The authority runs until the first `/`, `?` or `#`.
fn authority(input: &str) -> (&str, &str) {
    let end = input.find(['/', '?', '#']).unwrap_or(input.len());
    input.split_at(end)
}

/// Split `user[:pass]@` off an authority at its last `@`.
fn userinfo(authority: &str) -> (&str, &str, &str) {
    match authority.rfind('@') {
        Some(at) => {
            let (info, host_port) = (&authority[..at], &authority[at + 1..]);
            let (username, password) = info.split_once(':').unwrap_or((info, ""));
            (username, password, host_port)
        }
        None => ("", "", authority),
    }
}

fn path(input: &str) -> (&str, &str) {
    if !input.starts_with('/') {
        return ("", input);
    }
    let end = input.find(['?', '#']).unwrap_or(input.len());
    input.split_at(end)
}

fn query(input: &str) -> (&str, &str) {
    if !input.starts_with('?') {
        return ("", input);
    }
    let end = input.find('#').unwrap_or(input.len());
    input.split_at(end)
}

fn fragment(input: &str) -> &str {
    if input.starts_with('#') {
        input
    } else {
        ""
    }
}
