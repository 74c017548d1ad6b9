// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

use chrono::{Local, NaiveDate};

/// Parse the target date: `YYYY-MM-DD`, or `today` for the current local date.
///
/// # Errors
/// Returns an error if the input is neither `today` nor a valid calendar date.
pub fn parse_target_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|err| format!("Cannot parse date '{s}': {err}"))
}

/// Accept an extension with or without its leading dot; reject empty ones.
///
/// # Errors
/// Returns an error when nothing but dots and whitespace is given, or the value
/// contains a path separator.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let trimmed = s.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(format!("extension '{s}' is empty"));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(format!("extension '{s}' must not contain a path separator"));
    }
    Ok(trimmed.to_string())
}

fn parse_bounded_number<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s.parse::<T>().map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1)
}
