use std::fmt;

use chrono::{Days, Local, NaiveDate};

/// Format of every stored expiration date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The relative estimates offered when the exact expiration date is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Estimate {
    /// "1 day"
    OneDay,
    /// "2 days"
    TwoDays,
    /// "3 days"
    ThreeDays,
    /// "1 week"
    OneWeek,
    /// "10 days"
    TenDays,
    /// "1 month", counted as 30 days
    OneMonth,
}

impl Estimate {
    /// Every estimate, shortest first.
    pub const ALL: [Self; 6] = [
        Self::OneDay,
        Self::TwoDays,
        Self::ThreeDays,
        Self::OneWeek,
        Self::TenDays,
        Self::OneMonth,
    ];

    /// The number of days this estimate adds to today.
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::OneDay => 1,
            Self::TwoDays => 2,
            Self::ThreeDays => 3,
            Self::OneWeek => 7,
            Self::TenDays => 10,
            Self::OneMonth => 30,
        }
    }

    /// The keyword stored and displayed for this estimate.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::OneDay => "1 day",
            Self::TwoDays => "2 days",
            Self::ThreeDays => "3 days",
            Self::OneWeek => "1 week",
            Self::TenDays => "10 days",
            Self::OneMonth => "1 month",
        }
    }

    /// Look up an estimate by its exact keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.keyword() == keyword)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Day offset for a keyword. Unrecognised keywords count as zero days.
#[must_use]
pub fn offset_days(keyword: &str) -> u64 {
    Estimate::from_keyword(keyword).map_or(0, Estimate::days)
}

/// Resolve an estimate keyword into a `YYYY-MM-DD` date relative to `today`.
///
/// An empty keyword resolves to an empty string rather than to today. Any
/// other keyword always produces a date; unrecognised keywords are not an
/// error and resolve to `today` itself.
#[must_use]
pub fn resolve_estimate(keyword: &str, today: NaiveDate) -> String {
    if keyword.is_empty() {
        return String::new();
    }

    let offset = offset_days(keyword);
    if offset == 0 {
        tracing::debug!("Unrecognised estimate '{keyword}', resolving to today");
    }

    format_date(today + Days::new(offset))
}

/// Format a calendar date in the stored form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The current calendar date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
