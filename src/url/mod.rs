//! URL processing and manipulation.
//!
//! This module contains:
//! - The scanner that splits a URL string into raw components
//! - Parsing into [`ParsedUrl`](crate::ParsedUrl) and stringifying back
//! - The query string codec
//! - Path splitting and URL joining
//! - Normalization

pub(crate) mod grammar;
pub mod normalizer;
pub mod parser;
pub mod path;
pub mod query;
pub mod stringify;

// Re-export main functionality
pub use normalizer::{normalize, normalize_percent_encoding, remove_dot_segments};
pub use parser::parse;
pub use path::{join, split, split_path};
pub use query::{decode_component, encode_component, parse_query, stringify_query};
pub use stringify::stringify;
