use std::path::PathBuf;

use dialoguer::Confirm;
use pantry::{Pantry, PantryError};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Delete {
    /// Position of the ingredient, as shown by `pantry list`
    position: usize,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

impl Delete {
    #[instrument]
    pub fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        let mut pantry = Pantry::open(data_dir);

        let ingredients = pantry.ingredients()?;
        let Some(target) = ingredients.get(self.position) else {
            return Err(PantryError::OutOfRange {
                position: self.position,
                len: ingredients.len(),
            }
            .into());
        };

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete {}?", target.key()))
                .default(false)
                .interact()?;
            if !confirmed {
                println!("Cancelled");
                return Ok(());
            }
        }

        let removed = pantry.delete_at(self.position)?;

        println!("{}", format!("✅ Deleted {}", removed.key()).success());
        Ok(())
    }
}
