//! The read-modify-write flows over the stored ingredient list.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    domain::{BrowseQuery, Config, FormError, Ingredient, IngredientKey, query},
    lookup::{ProductLookup, scanned_ingredient},
    storage::{FileStore, JsonRepository, Repository, StoreError},
};

/// Name of the configuration file inside a data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// The ingredient collection together with its configuration.
///
/// Each mutating method loads the full list, changes it and writes the full
/// list back before returning. Nothing is cached between calls.
#[derive(Debug)]
pub struct Pantry<R> {
    repository: R,
    config: Config,
}

impl Pantry<JsonRepository<FileStore>> {
    /// Open the pantry stored in `data_dir`.
    ///
    /// Reads `config.toml` from the same directory, using the defaults if it
    /// is missing or invalid.
    #[must_use]
    pub fn open(data_dir: PathBuf) -> Self {
        let config = Config::load_or_default(&config_path(&data_dir));
        Self::new(JsonRepository::new(FileStore::new(data_dir)), config)
    }
}

/// Location of the configuration file for a data directory.
#[must_use]
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

impl<R: Repository> Pantry<R> {
    /// A pantry over `repository`.
    #[must_use]
    pub const fn new(repository: R, config: Config) -> Self {
        Self { repository, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Every stored ingredient, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub fn ingredients(&self) -> Result<Vec<Ingredient>, PantryError> {
        Ok(self.repository.load()?)
    }

    /// Find the first ingredient with the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded or nothing matches.
    pub fn find(&self, key: &IngredientKey) -> Result<Ingredient, PantryError> {
        self.ingredients()?
            .into_iter()
            .find(|item| item.matches(key))
            .ok_or_else(|| PantryError::NotFound(key.clone()))
    }

    /// Append a new ingredient.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded or written.
    pub fn add(&mut self, ingredient: Ingredient) -> Result<(), PantryError> {
        let mut ingredients = self.repository.load()?;
        tracing::info!("Added ingredient: {}", ingredient.key());
        ingredients.push(ingredient);
        self.repository.replace_all(&ingredients)?;
        Ok(())
    }

    /// Replace every ingredient identified by `previous` with `updated`.
    ///
    /// Records are matched by their key before the edit, since the edit may
    /// change the name or expiration date. Returns how many were replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded or written, or if no
    /// ingredient has the key `previous`.
    pub fn update(
        &mut self,
        previous: &IngredientKey,
        updated: &Ingredient,
    ) -> Result<usize, PantryError> {
        let replaced = self.modify_matching(previous, |item| *item = updated.clone())?;
        tracing::info!("Updated {replaced} ingredient(s): {previous} -> {}", updated.key());
        Ok(replaced)
    }

    /// Record a freshness check on every ingredient identified by `key`.
    ///
    /// Only the last-checked time changes. Returns how many were touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded or written, or if no
    /// ingredient has the key.
    pub fn mark_checked(
        &mut self,
        key: &IngredientKey,
        now: DateTime<Utc>,
    ) -> Result<usize, PantryError> {
        let checked = self.modify_matching(key, |item| item.mark_checked(now))?;
        tracing::info!("Marked {checked} ingredient(s) as checked: {key}");
        Ok(checked)
    }

    /// Remove the ingredient at `position` in the stored list.
    ///
    /// Exactly one record is removed even if others share its key.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded or written, or if
    /// `position` is past the end of the list.
    pub fn delete_at(&mut self, position: usize) -> Result<Ingredient, PantryError> {
        let mut ingredients = self.repository.load()?;
        if position >= ingredients.len() {
            return Err(PantryError::OutOfRange {
                position,
                len: ingredients.len(),
            });
        }

        let removed = ingredients.remove(position);
        self.repository.replace_all(&ingredients)?;

        tracing::info!("Deleted ingredient: {}", removed.key());
        Ok(removed)
    }

    /// Look up a scanned barcode and store the product as a new ingredient.
    ///
    /// Returns the stored record, or `None` if the product is unknown, in
    /// which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the list cannot be loaded or
    /// written.
    pub fn register_scan<L: ProductLookup>(
        &mut self,
        lookup: &L,
        code: &str,
    ) -> Result<Option<Ingredient>, PantryError> {
        let Some(product_name) = lookup
            .lookup(code)
            .map_err(|e| PantryError::Lookup(Box::new(e)))?
        else {
            tracing::info!("No product found for barcode {code}");
            return Ok(None);
        };

        let ingredient = scanned_ingredient(&product_name)?;
        self.add(ingredient.clone())?;
        Ok(Some(ingredient))
    }

    /// Ingredients needing attention at `now`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub fn expiring_soon<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<Vec<Ingredient>, PantryError> {
        let ingredients = self.repository.load()?;
        Ok(query::expiring_soon(&ingredients, now, &self.config)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Ingredients matching the browse filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub fn browse(&self, browse: &BrowseQuery) -> Result<Vec<Ingredient>, PantryError> {
        let ingredients = self.repository.load()?;
        Ok(browse
            .apply(&ingredients, self.config.recent_limit())
            .into_iter()
            .cloned()
            .collect())
    }

    fn modify_matching(
        &mut self,
        key: &IngredientKey,
        mut change: impl FnMut(&mut Ingredient),
    ) -> Result<usize, PantryError> {
        let mut ingredients = self.repository.load()?;

        let mut matched = 0;
        for item in ingredients.iter_mut().filter(|item| item.matches(key)) {
            change(item);
            matched += 1;
        }

        if matched == 0 {
            return Err(PantryError::NotFound(key.clone()));
        }

        self.repository.replace_all(&ingredients)?;
        Ok(matched)
    }
}

/// Failures of the pantry flows.
#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    /// The stored list could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The submitted form was invalid.
    #[error(transparent)]
    Form(#[from] FormError),
    /// No stored ingredient has the given key.
    #[error("ingredient {0} not found")]
    NotFound(IngredientKey),
    /// A position past the end of the list.
    #[error("no ingredient at position {position} (the pantry holds {len})")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Number of stored ingredients.
        len: usize,
    },
    /// The barcode lookup failed.
    #[error("barcode lookup failed: {0}")]
    Lookup(#[source] Box<dyn std::error::Error + Send + Sync>),
}
