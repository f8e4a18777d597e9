/// Fresh produce. The only packaging for which a ripeness status applies.
pub const FRESH: &str = "fresh";

/// Packaged confections, which can be opened.
pub const CONFECTION: &str = "confection";

/// Older spelling of [`CONFECTION`], still present in existing stores.
pub const CANNED: &str = "canned";

/// Whether ripeness tracking applies to this packaging.
#[must_use]
pub fn is_fresh(packing: &str) -> bool {
    packing == FRESH
}

/// Whether the opened/closed state applies to this packaging.
#[must_use]
pub fn is_confectioned(packing: &str) -> bool {
    packing == CONFECTION || packing == CANNED
}
