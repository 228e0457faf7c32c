//! urlkit - parse, stringify, split, join and normalize URLs
//!
//! This crate decomposes full or partial URL strings into their components and puts them
//! back together. It is deliberately forgiving: `localhost:3000`, `/just/a/path` and even
//! the empty string all parse, with missing components left empty.
//!
//! # Features
//!
//! - **Round-trip**: `parse` and `stringify` agree, so `parse(u).href()` reparses to itself
//! - **Deterministic**: query strings are always serialized in key order
//! - **Normalizing**: RFC 3986 case, percent-encoding, dot-segment and default-port
//!   normalization that does not change what the URL refers to
//! - **Total**: only percent-decoding of the query can fail
//!
//! # Quick Start
//!
//! ```
//! use urlkit::{join, normalize, parse, split, stringify, stringify_query, UrlOptions};
//!
//! let url = parse("http://localhost:3000/test/index.php?id=36&a=b#top")?;
//! assert_eq!(url.host(), "localhost:3000");
//! assert_eq!(url.query_value("a"), Some("b"));
//!
//! let rebuilt = stringify(&UrlOptions::new().protocol("https").hostname("example.com").pathname("docs"));
//! assert_eq!(rebuilt, "https://example.com/docs");
//!
//! assert_eq!(split("/foo//bar/"), vec!["foo", "", "bar"]);
//! assert_eq!(join(["http://test.com/v1/", "/users/"]), "http://test.com/v1/users");
//! assert_eq!(normalize("HTTP://Example.COM:80/a/./b/../c"), "http://example.com/a/c");
//! assert_eq!(stringify_query(vec![("b", 2), ("a", 1)]), "a=1&b=2");
//! # Ok::<(), urlkit::UrlError>(())
//! ```
//!
//! # Components
//!
//! | Field          | Example                  | When absent |
//! |----------------|--------------------------|-------------|
//! | protocol       | `http:`                  | `""`        |
//! | username       | `john`                   | `""`        |
//! | password       | `doe`                    | `""`        |
//! | hostname       | `localhost`              | `""`        |
//! | port           | `3000`                   | `""`        |
//! | host           | `localhost:3000`         | derived     |
//! | pathname       | `/test/index.php`        | `"/"`       |
//! | search         | `?id=36`                 | `""`        |
//! | hash           | `#top`                   | `""`        |
//! | origin         | `http://localhost:3000`  | derived     |
//! | href           | the whole URL            | derived     |
//! | search_params  | `{"id": "36"}`           | empty       |
//!
//! # Error Handling
//!
//! [`parse`] and [`parse_query`] return `Result<T, UrlError>`; the error means a query key
//! or value could not be percent-decoded. Everything else returns plain values.

// Re-export the function surface
pub use crate::url::{
    decode_component, encode_component, join, normalize, normalize_percent_encoding, parse,
    parse_query, remove_dot_segments, split, split_path, stringify, stringify_query,
};

// Re-export public types
pub use error::UrlError;
pub use types::{ParsedQuery, ParsedUrl, Query, QueryValue, UrlOptions};

// Module declarations
pub mod error;
pub mod types;
pub mod url;
