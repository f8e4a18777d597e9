use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

use crate::domain::expiration::parse_date;

/// A perishable item in the pantry.
///
/// This is the only persisted entity. Records have no surrogate identifier;
/// they are located by their [`IngredientKey`], the pair of name and
/// expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Display name, part of the identity key.
    pub name: NonEmptyString,

    /// Free text, typically a brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Food category, e.g. "dairy".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Storage location, e.g. "fridge".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Packaging kind. Drives which of `status` and `is_open` are meaningful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing: Option<String>,

    /// Ripeness, only meaningful for fresh produce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether a confection has been opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,

    /// Canonical `YYYY-MM-DD` date, or the empty string when unresolved.
    #[serde(default)]
    pub expiration_date: String,

    /// RFC 3339 timestamp of the last freshness check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,

    /// Reserved. Nothing populates this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ripeness_changed_at: Option<String>,
}

impl Ingredient {
    /// Create an ingredient with only a name and an expiration date.
    #[must_use]
    pub const fn new(name: NonEmptyString, expiration_date: String) -> Self {
        Self {
            name,
            label: None,
            category: None,
            location: None,
            packing: None,
            status: None,
            is_open: None,
            expiration_date,
            last_checked: None,
            ripeness_changed_at: None,
        }
    }

    /// The compound identity of this record.
    #[must_use]
    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(self.name.as_str(), self.expiration_date.as_str())
    }

    /// Whether this record is identified by `key`.
    #[must_use]
    pub fn matches(&self, key: &IngredientKey) -> bool {
        self.name.as_str() == key.name && self.expiration_date == key.expiration_date
    }

    /// The label, if set and non-empty.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        present(self.label.as_ref())
    }

    /// The category, if set and non-empty.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        present(self.category.as_ref())
    }

    /// The storage location, if set and non-empty.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        present(self.location.as_ref())
    }

    /// The packaging kind, if set and non-empty.
    #[must_use]
    pub fn packing(&self) -> Option<&str> {
        present(self.packing.as_ref())
    }

    /// The ripeness status, if set and non-empty.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        present(self.status.as_ref())
    }

    /// The last-checked timestamp, if set and non-empty.
    #[must_use]
    pub fn last_checked(&self) -> Option<&str> {
        present(self.last_checked.as_ref())
    }

    /// `true` only when the record explicitly says it is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open == Some(true)
    }

    /// The expiration date, if it is set and well formed.
    #[must_use]
    pub fn expiration(&self) -> Option<NaiveDate> {
        parse_date(&self.expiration_date)
    }

    /// Record a freshness check at `now`.
    ///
    /// Only `last_checked` is touched.
    pub fn mark_checked(&mut self, now: DateTime<Utc>) {
        self.last_checked = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
}

/// Identity of an [`Ingredient`]: its name and expiration date.
///
/// Two distinct ingredients sharing both values collide. Edits and rechecks
/// affect every record with the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientKey {
    /// Ingredient name.
    pub name: String,
    /// Stored expiration date string, possibly empty.
    pub expiration_date: String,
}

impl IngredientKey {
    /// Construct a key from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, expiration_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expiration_date: expiration_date.into(),
        }
    }
}

impl fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expiration_date.is_empty() {
            write!(f, "{} (no expiration)", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.expiration_date)
        }
    }
}

/// Empty strings count as absent.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
