use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_snapshot::cli::{
    handle_config_command, handle_show_command, handle_toggle_command, ConfigArgs, ShowArgs,
};
use ledger_snapshot::config::{FileSettingsStore, SettingsUpdater, SnapshotPaths};
use ledger_snapshot::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "snapshot",
    version,
    about = "Per-category balance snapshot for plain-text ledgers",
    long_about = "Summarizes account balances per category (Assets, Liabilities, \
                  Income, Expenses), rolling child accounts up into their \
                  top-level account. Balances are read from a JSON file mapping \
                  each date to the account balances at the end of that day."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the category snapshot
    Show(ShowArgs),

    /// Show or hide a category in the snapshot
    Toggle {
        /// Category name (Assets, Liabilities, Income, Expenses)
        category: String,
    },

    /// Show current settings, or change them with the flags below
    Config(ConfigArgs),

    /// Write the default settings file
    Init,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = SnapshotPaths::new()?;
    let mut store = FileSettingsStore::open(paths.clone())?;

    match cli.command {
        Commands::Show(args) => handle_show_command(&paths, store.settings(), args)?,
        Commands::Toggle { category } => handle_toggle_command(&mut store, &category)?,
        Commands::Config(args) => handle_config_command(&mut store, args)?,
        Commands::Init => {
            if paths.is_initialized() {
                println!("Already initialized at {}", paths.base_dir().display());
            } else {
                store.settings().save(&paths)?;
                println!("Initialized settings at {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}
