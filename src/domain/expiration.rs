use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::domain::estimate::{DATE_FORMAT, format_date, resolve_estimate};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How the user described an expiration date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpirationInput {
    /// A date read off the packaging.
    Exact(NaiveDate),
    /// A relative estimate keyword such as "1 week". May be empty.
    Estimate(String),
}

impl Default for ExpirationInput {
    fn default() -> Self {
        Self::Estimate(String::new())
    }
}

impl ExpirationInput {
    /// Build the input from the raw form fields.
    ///
    /// `exact_date` is only used when `is_exact` is set, `estimate` only when
    /// it is not.
    #[must_use]
    pub fn new(is_exact: bool, exact_date: NaiveDate, estimate: impl Into<String>) -> Self {
        if is_exact {
            Self::Exact(exact_date)
        } else {
            Self::Estimate(estimate.into())
        }
    }

    /// Recover the input that produced a stored expiration value.
    ///
    /// Values mentioning "day" are treated as estimate keywords, any other
    /// non-empty value as an exact date. An exact value that cannot be parsed
    /// falls back to `today`.
    #[must_use]
    pub fn from_stored(expiration_date: &str, today: NaiveDate) -> Self {
        if expiration_date.is_empty() {
            return Self::default();
        }
        if expiration_date.contains("day") {
            return Self::Estimate(expiration_date.to_string());
        }
        Self::Exact(parse_date(expiration_date).unwrap_or_else(|| {
            tracing::debug!("Unparseable expiration date '{expiration_date}', using today");
            today
        }))
    }

    /// Whether this is an exact date.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// The canonical `YYYY-MM-DD` string, or empty for an empty estimate.
    #[must_use]
    pub fn resolve(&self, today: NaiveDate) -> String {
        match self {
            Self::Exact(date) => format_date(*date),
            Self::Estimate(keyword) => resolve_estimate(keyword, today),
        }
    }
}

/// Resolve an expiration date from the raw form fields.
#[must_use]
pub fn resolve_expiration(
    is_exact: bool,
    exact_date: NaiveDate,
    estimate: &str,
    today: NaiveDate,
) -> String {
    ExpirationInput::new(is_exact, exact_date, estimate).resolve(today)
}

/// Parse a stored `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// The instant an expiration date starts, local midnight.
fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Whole days left before `expiration_date`, rounded up and never negative.
///
/// Dates in the past, and values that are empty or malformed, yield `0`. Use
/// [`is_expired`] to tell whether something has actually expired.
#[must_use]
pub fn days_until(expiration_date: &str, now: NaiveDateTime) -> u64 {
    let Some(date) = parse_date(expiration_date) else {
        return 0;
    };

    let millis = (start_of(date) - now).num_milliseconds();
    if millis <= 0 {
        return 0;
    }

    let days = millis / MILLIS_PER_DAY + i64::from(millis % MILLIS_PER_DAY != 0);
    days.unsigned_abs()
}

/// Whether the expiration date has started before `now`.
///
/// This is a raw comparison, so an item expiring today is already expired
/// once the day has begun. Empty or malformed dates are never expired.
#[must_use]
pub fn is_expired(expiration_date: &str, now: NaiveDateTime) -> bool {
    parse_date(expiration_date).is_some_and(|date| start_of(date) < now)
}

/// Whether the expiration date falls no later than `window_days` from `now`.
///
/// Includes dates already in the past. Empty or malformed dates never match.
/// A window reaching past the last representable date covers every date.
#[must_use]
pub fn expires_within_window(
    expiration_date: &str,
    now: NaiveDateTime,
    window_days: u32,
) -> bool {
    parse_date(expiration_date).is_some_and(|date| {
        TimeDelta::try_days(i64::from(window_days))
            .and_then(|window| now.checked_add_signed(window))
            .is_none_or(|limit| start_of(date) <= limit)
    })
}
