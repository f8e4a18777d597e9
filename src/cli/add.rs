use std::path::PathBuf;

use pantry::{
    IngredientForm, Pantry,
    domain::estimate::today,
    lookup::{UNNAMED_PRODUCT, has_placeholder_name},
};
use tracing::instrument;

use super::{fields::Fields, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Add {
    /// Name of the ingredient
    name: String,

    #[command(flatten)]
    fields: Fields,
}

impl Add {
    #[instrument]
    pub fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        let mut pantry = Pantry::open(data_dir);

        let mut form = IngredientForm::new();
        form.set_name(self.name);
        self.fields.apply(&mut form);

        let ingredient = form.build(today())?;
        if has_placeholder_name(&ingredient) {
            tracing::warn!(
                "Saving as '{UNNAMED_PRODUCT}'; give it a real name with 'pantry edit --rename'"
            );
        }
        let key = ingredient.key();
        pantry.add(ingredient)?;

        println!("{}", format!("✅ Added {key}").success());
        Ok(())
    }
}
