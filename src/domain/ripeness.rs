use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::Ingredient;

/// Ripeness status that puts an item on the expiring-soon list by itself.
pub const RIPE: &str = "ripe";

/// Days allowed between freshness checks unless configured otherwise.
pub const DEFAULT_RECHECK_INTERVAL_DAYS: u32 = 3;

/// Decides when an ingredient with a ripeness status should be looked at
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecheckPolicy {
    interval: TimeDelta,
}

impl Default for RecheckPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RECHECK_INTERVAL_DAYS)
    }
}

impl RecheckPolicy {
    /// A policy requiring a check every `interval_days` days.
    #[must_use]
    pub fn new(interval_days: u32) -> Self {
        Self {
            interval: TimeDelta::days(i64::from(interval_days)),
        }
    }

    /// Whether `item` needs a new freshness check at `now`.
    ///
    /// - items without a ripeness status never do
    /// - items that were never checked always do
    /// - otherwise, once strictly more than the interval has passed since the
    ///   last check
    ///
    /// A last-checked value that is not an RFC 3339 timestamp never triggers a
    /// check.
    #[must_use]
    pub fn needs_recheck(&self, item: &Ingredient, now: DateTime<Utc>) -> bool {
        if item.status().is_none() {
            return false;
        }

        let Some(last_checked) = item.last_checked() else {
            return true;
        };

        match DateTime::parse_from_rfc3339(last_checked) {
            Ok(last_checked) => now - last_checked.with_timezone(&Utc) > self.interval,
            Err(e) => {
                tracing::debug!(
                    "Ignoring malformed lastChecked '{last_checked}' on {}: {e}",
                    item.name
                );
                false
            }
        }
    }
}

/// [`RecheckPolicy::needs_recheck`] with the default interval.
#[must_use]
pub fn needs_recheck(item: &Ingredient, now: DateTime<Utc>) -> bool {
    RecheckPolicy::default().needs_recheck(item, now)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use non_empty_string::NonEmptyString;
    use test_case::test_case;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn avocado(status: Option<&str>, last_checked: Option<DateTime<Utc>>) -> Ingredient {
        let mut item = Ingredient::new(
            NonEmptyString::new("Avocado".to_string()).unwrap(),
            "2025-06-20".to_string(),
        );
        item.packing = Some("fresh".to_string());
        item.status = status.map(ToString::to_string);
        if let Some(checked) = last_checked {
            item.mark_checked(checked);
        }
        item
    }

    #[test]
    fn no_status_never_needs_check() {
        assert!(!needs_recheck(&avocado(None, None), now()));
        assert!(!needs_recheck(&avocado(Some(""), None), now()));
        let long_ago = now() - TimeDelta::days(60);
        assert!(!needs_recheck(&avocado(None, Some(long_ago)), now()));
    }

    #[test]
    fn never_checked_needs_check() {
        assert!(needs_recheck(&avocado(Some("unripe"), None), now()));
    }

    #[test]
    fn empty_last_checked_counts_as_never_checked() {
        let mut item = avocado(Some("unripe"), None);
        item.last_checked = Some(String::new());
        assert!(needs_recheck(&item, now()));
    }

    #[test_case(TimeDelta::days(4), true; "four days ago")]
    #[test_case(TimeDelta::days(2), false; "two days ago")]
    #[test_case(TimeDelta::days(3), false; "exactly three days ago")]
    #[test_case(TimeDelta::days(3) + TimeDelta::seconds(1), true; "just over three days ago")]
    #[test_case(TimeDelta::days(3) - TimeDelta::seconds(1), false; "just under three days ago")]
    #[test_case(TimeDelta::zero(), false; "just checked")]
    fn compares_against_interval(since: TimeDelta, expected: bool) {
        let item = avocado(Some("ripening"), Some(now() - since));
        assert_eq!(needs_recheck(&item, now()), expected);
    }

    #[test]
    fn custom_interval() {
        let item = avocado(Some("ripening"), Some(now() - TimeDelta::days(2)));
        assert!(RecheckPolicy::new(1).needs_recheck(&item, now()));
        assert!(!RecheckPolicy::new(2).needs_recheck(&item, now()));
    }

    #[test_case(0, TimeDelta::seconds(1), true; "zero interval after any time")]
    #[test_case(0, TimeDelta::zero(), false; "zero interval right at the check")]
    #[test_case(u32::MAX, TimeDelta::days(60), false; "huge interval two months on")]
    #[test_case(u32::MAX, TimeDelta::days(365 * 100), false; "huge interval a century on")]
    fn extreme_intervals(interval_days: u32, since: TimeDelta, expected: bool) {
        let item = avocado(Some("ripening"), Some(now() - since));
        assert_eq!(
            RecheckPolicy::new(interval_days).needs_recheck(&item, now()),
            expected
        );
    }

    #[test]
    fn malformed_last_checked_is_ignored() {
        let mut item = avocado(Some("ripening"), None);
        item.last_checked = Some("last tuesday".to_string());
        assert!(!needs_recheck(&item, now()));
    }

    #[test]
    fn accepts_offset_timestamps() {
        let mut item = avocado(Some("ripening"), None);
        item.last_checked = Some("2025-06-06T14:00:00+02:00".to_string());
        assert!(needs_recheck(&item, now()));
        item.last_checked = Some("2025-06-07T14:00:00+02:00".to_string());
        assert!(!needs_recheck(&item, now()));
    }
}
