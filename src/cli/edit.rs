use std::path::PathBuf;

use pantry::{
    IngredientForm, IngredientKey, Pantry,
    domain::estimate::today,
    lookup::{UNNAMED_PRODUCT, has_placeholder_name},
};
use tracing::instrument;

use super::{fields::Fields, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Edit {
    /// Current name of the ingredient
    name: String,

    /// Current expiration date (omit if it has none)
    #[arg(default_value = "")]
    expiration: String,

    /// New name
    #[arg(long)]
    rename: Option<String>,

    #[command(flatten)]
    fields: Fields,

    /// Remove the expiration date
    #[arg(long, conflicts_with_all = ["date", "estimate"])]
    clear_expiration: bool,
}

impl Edit {
    #[instrument]
    pub fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        let mut pantry = Pantry::open(data_dir);
        let today = today();

        let previous = IngredientKey::new(self.name, self.expiration);
        let existing = pantry.find(&previous)?;

        let mut form = IngredientForm::edit(&existing, today);
        if let Some(name) = self.rename {
            form.set_name(name);
        }
        self.fields.apply(&mut form);
        if self.clear_expiration {
            form.set_estimate(String::new());
        }

        let updated = form.build(today)?;
        if has_placeholder_name(&updated) {
            tracing::warn!(
                "Saving as '{UNNAMED_PRODUCT}'; give it a real name with 'pantry edit --rename'"
            );
        }
        let replaced = pantry.update(&previous, &updated)?;

        if replaced == 1 {
            println!("{}", format!("✅ Updated {}", updated.key()).success());
        } else {
            println!(
                "{}",
                format!("✅ Updated {replaced} records to {}", updated.key()).success()
            );
        }
        Ok(())
    }
}
