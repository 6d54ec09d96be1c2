//! Detail string parsing.
//!
//! Every field-edit command takes a detail string of the form
//! `GROCERY <marker>VALUE`, where the marker is verb-specific (`d/` for
//! expiration, `c/` for category, `a/` for amounts, `r/` for remarks, `l/`
//! for locations, and the bare `$` for cost). This module holds the single
//! splitting routine every edit command shares.

use larder_foundation::{Error, Result};

/// Splits a detail string into a grocery identifier and a field payload.
///
/// Validation happens in a fixed order, and the operation aborts before any
/// mutation on the first failure:
///
/// 1. an empty detail string is [`EmptyInput`](larder_foundation::ErrorKind::EmptyInput);
/// 2. the string is split on the **first** occurrence of `marker`, so later
///    occurrences stay inside the payload;
/// 3. the trimmed identifier must satisfy `exists`, else
///    [`NoSuchGrocery`](larder_foundation::ErrorKind::NoSuchGrocery); note
///    this runs before the marker check, so a detail string with no marker
///    reports the whole string as an unknown grocery;
/// 4. an absent marker is [`MissingParameter`](larder_foundation::ErrorKind::MissingParameter);
/// 5. a payload that trims to empty is
///    [`IncompleteParameter`](larder_foundation::ErrorKind::IncompleteParameter).
///
/// Both halves come back trimmed.
///
/// # Errors
///
/// See the ordering above.
pub fn split_details<F>(
    details: &str,
    command: &str,
    marker: &str,
    exists: F,
) -> Result<(String, String)>
where
    F: Fn(&str) -> bool,
{
    if details.is_empty() {
        return Err(Error::empty_input("grocery"));
    }

    let (head, tail) = match details.split_once(marker) {
        Some((head, tail)) => (head, Some(tail)),
        None => (details, None),
    };

    let name = head.trim();
    if !exists(name) {
        return Err(Error::no_such_grocery(name));
    }

    let Some(tail) = tail else {
        return Err(Error::missing_parameter(command, marker));
    };

    let payload = tail.trim();
    if payload.is_empty() {
        return Err(Error::incomplete_parameter(marker));
    }

    Ok((name.to_string(), payload.to_string()))
}
