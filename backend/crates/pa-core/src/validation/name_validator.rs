//! Display-name validation.
//!
//! Checks run in a fixed order: length first, then markup or embedded URL.
//! Markup and URLs share one message; callers cannot tell them apart.

use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted display name, in characters
pub const NAME_MAX_LENGTH: usize = 255;

pub const NAME_TOO_LONG_MESSAGE: &str = "Full name can't be longer than 255 symbols";
pub const INVALID_NAME_MESSAGE: &str = "Enter a valid name";

static HTML_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>]").unwrap());
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://(?:[-\w.]|%[\da-fA-F]{2})*").unwrap());

/// Returns the user-facing rejection reason for `name`, or `None` if valid.
///
/// An empty name is valid.
pub fn get_name_validation_error(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }

    if name.chars().count() > NAME_MAX_LENGTH {
        return Some(NAME_TOO_LONG_MESSAGE);
    }

    if contains_html(name) || contains_url(name) {
        return Some(INVALID_NAME_MESSAGE);
    }

    None
}

fn contains_html(value: &str) -> bool {
    HTML_PATTERN.is_match(value)
}

fn contains_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}
