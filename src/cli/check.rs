use std::path::PathBuf;

use chrono::Utc;
use pantry::{IngredientKey, Pantry};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Check {
    /// Name of the ingredient
    name: String,

    /// Expiration date of the ingredient (omit if it has none)
    #[arg(default_value = "")]
    expiration: String,
}

impl Check {
    #[instrument]
    pub fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        let mut pantry = Pantry::open(data_dir);
        let key = IngredientKey::new(self.name, self.expiration);

        pantry.mark_checked(&key, Utc::now())?;

        println!("{}", format!("✅ Checked {key}").success());
        Ok(())
    }
}
