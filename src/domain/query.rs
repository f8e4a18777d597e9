//! Selections behind the expiring-soon and browse views.
//!
//! Every function borrows from the collection it is given and preserves its
//! order, except [`recently_added`] which reverses it.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Config, Ingredient,
    expiration::{days_until, expires_within_window},
    ripeness::{RIPE, RecheckPolicy},
};

/// Whether `item` belongs on the expiring-soon list.
///
/// Any one of these is enough:
///
/// - it expires within the configured window (or already has)
/// - it is ripe
/// - it has been opened
/// - it is due a freshness check
#[must_use]
pub fn is_expiring_soon<Tz: TimeZone>(
    item: &Ingredient,
    now: &DateTime<Tz>,
    config: &Config,
) -> bool {
    let window = config.expiring_window_days();
    expires_within_window(&item.expiration_date, now.naive_local(), window)
        || item.status() == Some(RIPE)
        || item.is_open()
        || config
            .recheck_policy()
            .needs_recheck(item, now.with_timezone(&Utc))
}

/// Items needing attention, in collection order.
pub fn expiring_soon<'a, Tz: TimeZone>(
    items: impl IntoIterator<Item = &'a Ingredient>,
    now: &DateTime<Tz>,
    config: &Config,
) -> Vec<&'a Ingredient> {
    items
        .into_iter()
        .filter(|item| is_expiring_soon(item, now, config))
        .collect()
}

/// Items with a valid expiration date at most `threshold_days` away.
///
/// Past dates count as zero days away and are included.
pub fn expiring_within<'a, Tz: TimeZone>(
    items: impl IntoIterator<Item = &'a Ingredient>,
    threshold_days: u32,
    now: &DateTime<Tz>,
) -> Vec<&'a Ingredient> {
    let now = now.naive_local();
    items
        .into_iter()
        .filter(|item| {
            item.expiration().is_some()
                && days_until(&item.expiration_date, now) <= u64::from(threshold_days)
        })
        .collect()
}

/// Whether the record lacks a category, a location or an expiration date.
#[must_use]
pub fn is_missing_data(item: &Ingredient) -> bool {
    item.category().is_none() || item.location().is_none() || item.expiration_date.is_empty()
}

/// Items with incomplete records.
pub fn missing_data<'a>(items: impl IntoIterator<Item = &'a Ingredient>) -> Vec<&'a Ingredient> {
    items.into_iter().filter(|item| is_missing_data(item)).collect()
}

/// The last `limit` items added, most recent first.
///
/// The store is append-only, so collection order is insertion order.
#[must_use]
pub fn recently_added(items: &[Ingredient], limit: usize) -> Vec<&Ingredient> {
    let start = items.len().saturating_sub(limit);
    items[start..].iter().rev().collect()
}

/// Items whose category is exactly `category`. An empty value matches nothing.
pub fn by_category<'a>(
    items: impl IntoIterator<Item = &'a Ingredient>,
    category: &str,
) -> Vec<&'a Ingredient> {
    filter_equal(items, category, Ingredient::category)
}

/// Items whose packaging is exactly `packing`. An empty value matches nothing.
pub fn by_packaging<'a>(
    items: impl IntoIterator<Item = &'a Ingredient>,
    packing: &str,
) -> Vec<&'a Ingredient> {
    filter_equal(items, packing, Ingredient::packing)
}

/// Items stored exactly at `location`. An empty value matches nothing.
pub fn by_location<'a>(
    items: impl IntoIterator<Item = &'a Ingredient>,
    location: &str,
) -> Vec<&'a Ingredient> {
    filter_equal(items, location, Ingredient::location)
}

fn filter_equal<'a>(
    items: impl IntoIterator<Item = &'a Ingredient>,
    wanted: &str,
    field: fn(&Ingredient) -> Option<&str>,
) -> Vec<&'a Ingredient> {
    items
        .into_iter()
        .filter(|item| field(item) == Some(wanted))
        .collect()
}

/// Mutually exclusive shortcut selections of the browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickFilter {
    /// The whole collection.
    #[default]
    All,
    /// Only incomplete records.
    Missing,
    /// Only the most recently added records.
    Recent,
}

/// The filters of the browse view.
///
/// The quick filter is applied first, then each non-empty equality filter in
/// turn. All of them must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseQuery {
    /// Shortcut selection applied before the equality filters.
    pub quick: QuickFilter,
    /// Category to match; empty means no category filter.
    pub category: String,
    /// Packaging to match; empty means no packaging filter.
    pub packing: String,
    /// Location to match; empty means no location filter.
    pub location: String,
}

impl BrowseQuery {
    /// Whether any filter is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.quick != QuickFilter::All
            || !self.category.is_empty()
            || !self.packing.is_empty()
            || !self.location.is_empty()
    }

    /// Clear every filter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Select the matching items. `recent_limit` sizes [`QuickFilter::Recent`].
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Ingredient], recent_limit: usize) -> Vec<&'a Ingredient> {
        let mut selected = match self.quick {
            QuickFilter::All => items.iter().collect(),
            QuickFilter::Missing => missing_data(items),
            QuickFilter::Recent => recently_added(items, recent_limit),
        };

        if !self.category.is_empty() {
            selected = by_category(selected, &self.category);
        }
        if !self.packing.is_empty() {
            selected = by_packaging(selected, &self.packing);
        }
        if !self.location.is_empty() {
            selected = by_location(selected, &self.location);
        }

        selected
    }
}
