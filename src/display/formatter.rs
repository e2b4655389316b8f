//! Value formatter
//!
//! Turns ontology identifiers into something an operator can read:
//! `http://ex.org/onto#Usine_Peugeot` becomes `Usine Peugeot`. This is a
//! best-effort humanization of the trailing segment, not a URI parser.

use crate::sparql::Term;
use regex::Regex;
use std::sync::OnceLock;

fn uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://").expect("URI pattern is valid"))
}

/// Whether `value` looks like an HTTP(S) identifier.
pub fn is_http_uri(value: &str) -> bool {
    uri_pattern().is_match(value)
}

/// Text after the final `/` or `#` of `uri`.
pub fn local_name(uri: &str) -> &str {
    uri.rsplit(['/', '#']).next().unwrap_or(uri)
}

/// Humanizes a raw value. Non-URI values are returned unchanged, so applying
/// this to its own output is a no-op.
pub fn humanize(value: &str) -> String {
    if !is_http_uri(value) {
        return value.to_string();
    }
    match local_name(value) {
        "" => value.to_string(),
        segment => segment.replace('_', " "),
    }
}

/// Formats an optional bound value for display.
pub fn format_term(term: Option<&Term>) -> Option<String> {
    term.map(|t| humanize(&t.value))
}
