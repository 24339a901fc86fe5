//! Date format handling at the form and rendering boundaries.
//!
//! Records store dates as ISO strings; end users read and edit them as
//! day/month/year. The two shapes are kept apart with an explicit tagged
//! format and one conversion function per direction. Ambiguous inputs are
//! rejected rather than guessed at.

use chrono::NaiveDate;

/// A date string classified by its textual shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`, optionally followed by a `T...` time suffix.
    Iso(NaiveDate),
    /// `DD/MM/YYYY` calendar input.
    DayMonthYear(NaiveDate),
}

impl DateFormat {
    /// Classify and parse a date string.
    ///
    /// Slash-delimited input is only ever day/month/year; dash-delimited
    /// input is only ever ISO. Anything else is an error.
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if trimmed.contains('/') {
            parse_dmy(trimmed).map(DateFormat::DayMonthYear)
        } else if trimmed.contains('-') {
            parse_iso(trimmed).map(DateFormat::Iso)
        } else {
            Err(format!("Unrecognized date format: {}", input))
        }
    }

    /// The calendar date regardless of the source shape.
    pub fn date(&self) -> NaiveDate {
        match self {
            DateFormat::Iso(d) | DateFormat::DayMonthYear(d) => *d,
        }
    }
}

/// Parse an ISO date, tolerating a trailing time component
/// (`2024-03-07` and `2024-03-07T00:00:00.000Z` both parse).
pub fn parse_iso(input: &str) -> Result<NaiveDate, String> {
    let date_part = match input.find('T') {
        Some(idx) => &input[..idx],
        None => input,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| format!("Invalid ISO date: {}", input))
}

/// Parse a `DD/MM/YYYY` calendar input.
pub fn parse_dmy(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, "%d/%m/%Y")
        .map_err(|_| format!("Invalid date, expected DD/MM/YYYY: {}", input))
}

/// Format a date in the stored ISO shape.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date in the user-facing day/month/year shape.
pub fn to_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Convert a stored ISO date into the calendar-input shape shown in the form.
pub fn to_date_input(iso: &str) -> Result<String, String> {
    parse_iso(iso).map(to_dmy)
}

/// Convert a calendar input back into the stored ISO shape.
pub fn from_date_input(dmy: &str) -> Result<String, String> {
    parse_dmy(dmy).map(to_iso)
}

/// Best-effort day/month/year rendering for certificate and detail output.
///
/// Unparseable values pass through untouched; display must not fail for
/// data the remote service accepted.
pub fn display_dmy(value: &str) -> String {
    match DateFormat::parse(value) {
        Ok(tagged) => to_dmy(tagged.date()),
        Err(_) => value.to_string(),
    }
}
