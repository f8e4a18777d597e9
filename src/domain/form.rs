//! Editable state behind the add and edit flows.

use chrono::NaiveDate;
use non_empty_string::NonEmptyString;

use crate::domain::{
    ExpirationInput, Ingredient,
    packing::{is_confectioned, is_fresh},
};

/// Reasons a form cannot be turned into an [`Ingredient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The name is empty or whitespace.
    #[error("ingredient name must not be empty")]
    EmptyName,
}

/// The fields a user edits when adding or changing an ingredient.
///
/// Packaging-dependent fields are kept consistent by the setters themselves:
///
/// - moving away from fresh packaging clears the ripeness status
/// - moving away from confection packaging clears the opened flag
///
/// The same rules are applied when a form is loaded from a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientForm {
    name: String,
    label: String,
    category: String,
    location: String,
    packing: String,
    status: String,
    is_open: bool,
    expiration: ExpirationInput,
    /// The record being edited, if any.
    original: Option<Ingredient>,
}

impl IngredientForm {
    /// An empty form for a new ingredient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing ingredient.
    ///
    /// Fields the form does not expose, such as the last-checked time, are
    /// carried over when the form is built.
    #[must_use]
    pub fn edit(existing: &Ingredient, today: NaiveDate) -> Self {
        let mut form = Self {
            name: existing.name.to_string(),
            label: existing.label().unwrap_or_default().to_string(),
            category: existing.category().unwrap_or_default().to_string(),
            location: existing.location().unwrap_or_default().to_string(),
            packing: existing.packing().unwrap_or_default().to_string(),
            status: existing.status().unwrap_or_default().to_string(),
            is_open: existing.is_open(),
            expiration: ExpirationInput::from_stored(&existing.expiration_date, today),
            original: Some(existing.clone()),
        };
        form.apply_packing_rules();
        form
    }

    /// Reset every field, leaving a blank form for a new ingredient.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The ingredient name as typed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the ingredient name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the free-text label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set the category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Set the storage location.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// The current packaging.
    #[must_use]
    pub fn packing(&self) -> &str {
        &self.packing
    }

    /// Change the packaging, clearing any field it no longer supports.
    pub fn set_packing(&mut self, packing: impl Into<String>) {
        self.packing = packing.into();
        self.apply_packing_rules();
    }

    /// The ripeness status. Always empty unless the packaging is fresh.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Set the ripeness status.
    ///
    /// Has no lasting effect unless the packaging is fresh.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.apply_packing_rules();
    }

    /// Whether the item is marked as opened. Always `false` unless the
    /// packaging is a confection.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Mark the item as opened or closed.
    ///
    /// Has no lasting effect unless the packaging is a confection.
    pub fn set_open(&mut self, is_open: bool) {
        self.is_open = is_open;
        self.apply_packing_rules();
    }

    /// Whether the packaging is fresh produce.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        is_fresh(&self.packing)
    }

    /// Whether the packaging is a confection.
    #[must_use]
    pub fn is_confectioned(&self) -> bool {
        is_confectioned(&self.packing)
    }

    /// How the expiration date is currently described.
    #[must_use]
    pub const fn expiration(&self) -> &ExpirationInput {
        &self.expiration
    }

    /// Use an exact expiration date.
    pub fn set_exact_date(&mut self, date: NaiveDate) {
        self.expiration = ExpirationInput::Exact(date);
    }

    /// Use a relative estimate such as "1 week".
    pub fn set_estimate(&mut self, keyword: impl Into<String>) {
        self.expiration = ExpirationInput::Estimate(keyword.into());
    }

    /// The expiration date the form would currently produce.
    #[must_use]
    pub fn expiration_date(&self, today: NaiveDate) -> String {
        self.expiration.resolve(today)
    }

    /// Build the ingredient described by this form.
    ///
    /// When editing, fields the form does not own are taken from the original
    /// record. Empty text fields are stored as absent.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyName`] if the name is blank.
    pub fn build(&self, today: NaiveDate) -> Result<Ingredient, FormError> {
        let name = NonEmptyString::new(self.name.trim().to_string())
            .map_err(|_| FormError::EmptyName)?;
        let expiration_date = self.expiration_date(today);

        let mut ingredient = match &self.original {
            Some(original) => Ingredient {
                name,
                expiration_date,
                ..original.clone()
            },
            None => Ingredient::new(name, expiration_date),
        };

        ingredient.label = optional(&self.label);
        ingredient.category = optional(&self.category);
        ingredient.location = optional(&self.location);
        ingredient.packing = optional(&self.packing);
        ingredient.status = optional(&self.status);
        ingredient.is_open = self.is_confectioned().then_some(self.is_open);

        Ok(ingredient)
    }

    fn apply_packing_rules(&mut self) {
        if !self.is_fresh() {
            self.status.clear();
        }
        if !self.is_confectioned() {
            self.is_open = false;
        }
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
