use crate::utils::error::{Result, SearchError};
use regex::{Regex, RegexBuilder};
use url::{form_urlencoded, Url};

const MAX_ADDRESS_CHARS: usize = 255;
const MAX_LOG_CHARS: usize = 1000;

lazy_static::lazy_static! {
    static ref ADDRESS_RE: Regex = RegexBuilder::new(r"^[a-z0-9äöåéèáàüøæ:.&+ -]{3,255}$")
        .case_insensitive(true)
        .build()
        .unwrap();
}

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Whether `address` only holds characters that occur in Stockholm street and
/// property names. Single quotes are rejected.
pub fn valid_address(address: &str) -> bool {
    if address.chars().count() > MAX_ADDRESS_CHARS {
        return false;
    }
    ADDRESS_RE.is_match(address)
}

/// Percent-quotes untrusted input before it reaches a log line.
///
/// Everything except ASCII letters, digits and `_.-~@` is `%XX` escaped.
/// Input longer than 1000 chars is cut and gets a `...` suffix, so the result
/// can still be longer than 1000 chars.
pub fn log_safe(input: &str) -> String {
    let cut: String;
    let input = if input.chars().count() > MAX_LOG_CHARS {
        cut = input.chars().take(MAX_LOG_CHARS).chain("...".chars()).collect();
        cut.as_str()
    } else {
        input
    };

    // form encoding differs from plain quoting in four spots
    form_urlencoded::byte_serialize(input.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
        .replace("%40", "@")
}
