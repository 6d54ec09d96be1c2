//! Command line splitting.
//!
//! A command line is `VERB REST-OF-LINE`. Only the verb is interpreted here;
//! the rest of the line is handed opaquely to whichever operation the verb
//! selects, because each edit command applies its own delimiter marker.

/// Splits a raw input line into a lower-cased verb and the untouched
/// remainder.
///
/// The remainder keeps its internal spacing (grocery names may contain
/// spaces) but is trimmed at both ends. A line with no remainder yields an
/// empty rest string.
#[must_use]
pub fn split_verb(line: &str) -> (String, String) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_lowercase(), rest.trim().to_string()),
        None => (trimmed.to_lowercase(), String::new()),
    }
}
