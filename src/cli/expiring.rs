use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use pantry::{Pantry, domain::query};
use tracing::instrument;

use super::{
    render::{self, OutputFormat, Row},
    terminal::Colorize,
};

#[derive(Debug, Parser, Default)]
#[command(about = "Show ingredients that need attention soon")]
pub struct Expiring {
    /// Only list items whose expiration date is at most N days away.
    ///
    /// Without N, the configured threshold is used.
    #[arg(long, value_name = "N")]
    within: Option<Option<u32>>,

    /// Output format (table, json)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Expiring {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        let pantry = Pantry::open(data_dir);
        let config = pantry.config();
        let ingredients = pantry.ingredients()?;
        let now = Local::now();

        let selected = match self.within {
            None => query::expiring_soon(&ingredients, &now, config),
            Some(days) => {
                let threshold = days.unwrap_or_else(|| config.expiring_threshold_days());
                query::expiring_within(&ingredients, threshold, &now)
            }
        };

        if selected.is_empty() && matches!(self.output, OutputFormat::Table) {
            println!("{}", "✅ Nothing needs attention.".success());
            return Ok(());
        }

        let rows = Row::collect(&ingredients, &selected, &now, config);
        render::print(&rows, self.output)
    }
}
