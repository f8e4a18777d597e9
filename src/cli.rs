use std::path::PathBuf;

mod add;
mod check;
mod delete;
mod edit;
mod expiring;
mod fields;
mod init;
mod list;
mod render;
mod terminal;

use add::Add;
use check::Check;
use clap::ArgAction;
use delete::Delete;
use edit::Edit;
use expiring::Expiring;
use init::Init;
use list::List;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The directory holding the pantry data
    #[arg(short, long, default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Expiring(Expiring::default()))
            .run(self.data_dir)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show what needs attention soon (default)
    ///
    /// Lists items expiring within the configured window, ripe or opened
    /// items, and items due a freshness check.
    Expiring(Expiring),

    /// Initialize a pantry in the data directory
    Init,

    /// Add an ingredient
    Add(Add),

    /// Change an existing ingredient
    ///
    /// The ingredient is identified by its current name and expiration date.
    Edit(Edit),

    /// Record that an ingredient's freshness was just checked
    Check(Check),

    /// Remove one ingredient by its position
    Delete(Delete),

    /// Browse ingredients with filters
    List(List),
}

impl Command {
    fn run(self, data_dir: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Expiring(command) => command.run(data_dir)?,
            Self::Init => Init::run(&data_dir)?,
            Self::Add(command) => command.run(data_dir)?,
            Self::Edit(command) => command.run(data_dir)?,
            Self::Check(command) => command.run(data_dir)?,
            Self::Delete(command) => command.run(data_dir)?,
            Self::List(command) => command.run(data_dir)?,
        }
        Ok(())
    }
}
