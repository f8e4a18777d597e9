//! Barcode lookup.
//!
//! Resolving a scanned code to a product name happens outside this crate;
//! [`ProductLookup`] is the seam a network client plugs into.

use non_empty_string::NonEmptyString;

use crate::domain::{FormError, Ingredient};

/// Name given to scanned products whose lookup returned an empty name.
pub const UNNAMED_PRODUCT: &str = "No Name";

/// Resolves scanned barcodes to product names.
pub trait ProductLookup {
    /// Failure reaching the lookup service.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The product name for `code`, or `None` if the product is unknown.
    ///
    /// A known product may have an empty name.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup could not be performed.
    fn lookup(&self, code: &str) -> Result<Option<String>, Self::Error>;
}

/// The record stored for a freshly scanned product.
///
/// It carries only a name and an unresolved expiration date, so it shows up
/// in the missing-data view until completed. A blank product name is replaced
/// with [`UNNAMED_PRODUCT`].
///
/// # Errors
///
/// Returns [`FormError::EmptyName`] if no usable name remains.
pub fn scanned_ingredient(product_name: &str) -> Result<Ingredient, FormError> {
    let name = match product_name.trim() {
        "" => UNNAMED_PRODUCT,
        trimmed => trimmed,
    };
    let name = NonEmptyString::new(name.to_string()).map_err(|_| FormError::EmptyName)?;
    Ok(Ingredient::new(name, String::new()))
}

/// Whether `item` still carries the name given to an unnamed scan.
#[must_use]
pub fn has_placeholder_name(item: &Ingredient) -> bool {
    item.name.as_str() == UNNAMED_PRODUCT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_product_name() {
        let item = scanned_ingredient("Organic Oat Milk").unwrap();
        assert_eq!(item.name.as_str(), "Organic Oat Milk");
        assert_eq!(item.expiration_date, "");
        assert_eq!(item.category, None);
    }

    #[test]
    fn blank_product_name_gets_placeholder() {
        assert_eq!(scanned_ingredient("").unwrap().name.as_str(), UNNAMED_PRODUCT);
        assert_eq!(scanned_ingredient("  ").unwrap().name.as_str(), UNNAMED_PRODUCT);
    }

    #[test]
    fn placeholder_name_is_recognised() {
        assert!(has_placeholder_name(&scanned_ingredient("").unwrap()));
        assert!(!has_placeholder_name(&scanned_ingredient("No Name Chips").unwrap()));
        assert!(!has_placeholder_name(&scanned_ingredient("no name").unwrap()));
    }
}
