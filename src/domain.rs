//! Domain models for ingredient tracking.
//!
//! Everything in here is pure: functions take the current date or time as an
//! argument and never touch storage.

/// The persisted ingredient record and its identity key.
pub mod ingredient;
pub use ingredient::{Ingredient, IngredientKey};

/// Relative expiration estimates such as "1 week".
pub mod estimate;
pub use estimate::{Estimate, resolve_estimate};

/// Expiration date resolution and countdowns.
pub mod expiration;
pub use expiration::{ExpirationInput, days_until, is_expired};

/// Freshness recheck rules.
pub mod ripeness;
pub use ripeness::{RecheckPolicy, needs_recheck};

/// Packaging classifiers.
pub mod packing;

mod form;
pub use form::{FormError, IngredientForm};

pub mod query;
pub use query::{BrowseQuery, QuickFilter};

mod config;
pub use config::Config;
