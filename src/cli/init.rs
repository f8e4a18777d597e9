use std::{fs, path::Path};

use pantry::{FileStore, JsonRepository, Repository, storage::config_path};
use tracing::instrument;

#[derive(Debug)]
pub struct Init;

impl Init {
    #[instrument]
    pub fn run(data_dir: &Path) -> anyhow::Result<()> {
        let config_path = config_path(data_dir);
        if config_path.exists() {
            anyhow::bail!("Pantry already initialized (found existing config.toml)");
        }

        fs::create_dir_all(data_dir)
            .map_err(|e| anyhow::anyhow!("Failed to create data directory: {e}"))?;

        pantry::Config::default()
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        // Rewriting the loaded list keeps any ingredients already stored here.
        let mut repository = JsonRepository::new(FileStore::new(data_dir.to_path_buf()));
        let existing = repository.load()?;
        repository.replace_all(&existing)?;

        println!("Initialized pantry in {}", data_dir.display());
        println!("  Created: config.toml");
        if existing.is_empty() {
            println!("  Created: ingredients.json (empty)");
        } else {
            println!("  Kept: ingredients.json ({} ingredients)", existing.len());
        }

        println!();
        println!("Next steps:");
        println!("  pantry add \"Milk\" --category dairy --location fridge --estimate \"1 week\"");

        Ok(())
    }
}
