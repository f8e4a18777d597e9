use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use pantry::{BrowseQuery, Pantry, QuickFilter};
use tracing::instrument;

use super::render::{self, OutputFormat, Row};

#[derive(Debug, Parser, Default)]
#[command(about = "Browse ingredients with filters")]
pub struct List {
    /// Show only records missing a category, location or expiration date
    #[arg(long, conflicts_with = "recent")]
    missing: bool,

    /// Show only the most recently added records, newest first
    #[arg(long)]
    recent: bool,

    /// Show only this category (exact match)
    #[arg(long)]
    category: Option<String>,

    /// Show only this packaging (exact match)
    #[arg(long)]
    packing: Option<String>,

    /// Show only this location (exact match)
    #[arg(long)]
    location: Option<String>,

    /// Output format (table, json)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        let pantry = Pantry::open(data_dir);
        let ingredients = pantry.ingredients()?;

        let query = self.query();
        let selected = query.apply(&ingredients, pantry.config().recent_limit());
        tracing::debug!(
            "Browse selected {} of {} ingredients",
            selected.len(),
            ingredients.len()
        );

        if selected.is_empty() && matches!(self.output, OutputFormat::Table) {
            if query.is_active() {
                println!("No ingredients match the filters.");
            } else {
                println!("The pantry is empty. Add something with 'pantry add'.");
            }
            return Ok(());
        }

        let rows = Row::collect(&ingredients, &selected, &Local::now(), pantry.config());
        render::print(&rows, self.output)
    }

    fn query(&self) -> BrowseQuery {
        let quick = if self.missing {
            QuickFilter::Missing
        } else if self.recent {
            QuickFilter::Recent
        } else {
            QuickFilter::All
        };

        BrowseQuery {
            quick,
            category: self.category.clone().unwrap_or_default(),
            packing: self.packing.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
        }
    }
}
