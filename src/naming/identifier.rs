//! Identifier sanitization
//!
//! Turns display-like strings ("lord_flowers", "9 lives") into dotted identifiers
//! restricted to `[A-Za-z0-9_.]`.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{NAMESPACE_SEPARATOR, WORD_SEPARATOR};
use crate::errors::{Result, malformed_input_error};

use super::options::ConverterOptions;

static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9_\.]+").expect("Failed to compile regex pattern for INVALID_CHARS")
});

// Any Unicode decimal digit; path segments are only guarded against ASCII digits
static LEADING_DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Nd}").expect("Failed to compile regex pattern for LEADING_DIGIT")
});

/// Converts a string into a valid dotted identifier
///
/// Underscores become word breaks, each word is capitalized, a leading digit is
/// guarded with `_`, and everything outside `[A-Za-z0-9_.]` is removed.
///
/// # Errors
/// Returns a malformed input error for an empty string.
pub fn convert_to_identifier(name: &str, options: &ConverterOptions) -> Result<String> {
    if name.is_empty() {
        return Err(malformed_input_error(
            name,
            "cannot build an identifier from an empty string",
        ));
    }

    let spaced = name.replace('_', " ");
    let capitalized = capitalize_words(&spaced, options);

    // Per-segment guards run on the stripped text so no dotted segment can
    // start with a digit once word breaks are gone.
    let identifier = if options.per_segment() {
        INVALID_CHARS
            .replace_all(&capitalized, "")
            .split(NAMESPACE_SEPARATOR)
            .map(guard_leading_digit)
            .collect::<Vec<_>>()
            .join(".")
    } else {
        INVALID_CHARS
            .replace_all(&guard_leading_digit(&capitalized), "")
            .into_owned()
    };

    trace!("Identifier for '{name}': '{identifier}'");
    Ok(identifier)
}

/// Uppercases lowercase ASCII letters that start the string or follow a word break
fn capitalize_words(name: &str, options: &ConverterOptions) -> String {
    let mut previous: Option<char> = None;
    name.chars()
        .map(|c| {
            let starts_word = match previous {
                None => true,
                Some(WORD_SEPARATOR) => true,
                Some(NAMESPACE_SEPARATOR) => options.per_segment(),
                Some(_) => false,
            };
            previous = Some(c);
            if starts_word && c.is_ascii_lowercase() {
                options.uppercase_locale.uppercase(c)
            } else {
                c
            }
        })
        .collect()
}

fn guard_leading_digit(fragment: &str) -> String {
    if LEADING_DIGIT.is_match(fragment) {
        format!("_{fragment}")
    } else {
        fragment.to_string()
    }
}
