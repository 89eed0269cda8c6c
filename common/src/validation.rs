//! Field rules for the product form and the release/revision date derivation.
//!
//! Everything here is a pure function of its inputs. "Today" is always passed
//! in by the caller so the rules behave the same in the browser, on the server
//! and in tests.

use chrono::{Datelike, Days, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A violated constraint on a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Violation {
    Required,
    MinLength,
    MaxLength,
    MinDate,
}

/// Constraints attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// When set, the value must parse as a date no earlier than the reference
    /// day handed to [`validate`].
    pub min_date: bool,
}

impl FieldRules {
    pub const fn text(min: usize, max: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min),
            max_length: Some(max),
            min_date: false,
        }
    }
}

pub const ID_RULES: FieldRules = FieldRules::text(3, 10);
pub const NAME_RULES: FieldRules = FieldRules::text(5, 100);
pub const DESCRIPTION_RULES: FieldRules = FieldRules::text(10, 200);
pub const LOGO_RULES: FieldRules = FieldRules {
    required: true,
    min_length: None,
    max_length: None,
    min_date: false,
};
pub const DATE_RELEASE_RULES: FieldRules = FieldRules {
    required: true,
    min_length: None,
    max_length: None,
    min_date: true,
};

/// Checks `value` against `rules` and returns every violated constraint.
///
/// An empty value only reports [`Violation::Required`]; length and date rules
/// are evaluated on non-empty input. A value that does not parse as a date is
/// treated as earlier than any minimum.
pub fn validate(value: &str, rules: &FieldRules, today: NaiveDate) -> Vec<Violation> {
    let mut violations = Vec::new();

    if value.trim().is_empty() {
        if rules.required {
            violations.push(Violation::Required);
        }
        return violations;
    }

    let length = value.chars().count();
    if rules.min_length.is_some_and(|min| length < min) {
        violations.push(Violation::MinLength);
    }
    if rules.max_length.is_some_and(|max| length > max) {
        violations.push(Violation::MaxLength);
    }
    if rules.min_date && parse_date(value).is_none_or(|date| date < today) {
        violations.push(Violation::MinDate);
    }

    violations
}

/// Per-field flags the form renders under an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    /// The field was interacted with and is invalid.
    pub show: bool,
    pub required: bool,
    pub min_length: bool,
    pub max_length: bool,
    pub min_date: bool,
}

impl FieldErrors {
    pub fn from_violations(violations: &[Violation], touched: bool) -> Self {
        Self {
            show: touched && !violations.is_empty(),
            required: violations.contains(&Violation::Required),
            min_length: violations.contains(&Violation::MinLength),
            max_length: violations.contains(&Violation::MaxLength),
            min_date: violations.contains(&Violation::MinDate),
        }
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Formats a date as zero padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Same month and day one year later. A day that does not exist in the
/// target month rolls forward, so Feb 29 becomes Mar 1.
pub fn one_year_after(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, date.month(), 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day() - 1))))
            .unwrap_or(date)
    })
}

/// Revision date for a release date typed in the form.
///
/// Returns an empty string for empty or unparseable input, which clears the
/// derived field instead of showing a stale value.
pub fn add_one_year(release: &str) -> String {
    parse_date(release)
        .map(|date| format_date(one_year_after(date)))
        .unwrap_or_default()
}
