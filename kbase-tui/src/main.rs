mod app;
mod cli;
mod collection;
mod config;
mod logging;
mod runtime;
mod store;
mod test_data;
mod time_utils;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::KbaseConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::{EntryStore, FileStorage, KeyValueStorage};
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = KbaseConfig::config_path()?;
            if !path.exists() {
                KbaseConfig::default().save()?;
                println!("Created default config at: {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Run => {
            let mut cfg = KbaseConfig::load()?;
            if let Some(path) = cli.storage_path {
                cfg.storage_path = Some(path);
            }
            let log_path = logging::init(&cfg)?;
            let storage_path = cfg.resolved_storage_path()?;
            let store = EntryStore::new(FileStorage::new(&storage_path), cfg.storage_key.clone());
            info!(
                storage = %storage_path.display(),
                key = store.key(),
                log = %log_path.display(),
                "starting"
            );
            run_tui(store, storage_path.display().to_string())
        }
        Commands::Dev => {
            let cfg = KbaseConfig::load()?;
            logging::init(&cfg)?;
            let store = test_data::seeded_store(&cfg.storage_key)
                .context("Failed to seed dev storage")?;
            info!(key = store.key(), "starting with in-memory storage");
            run_tui(store, "in-memory dev storage (not saved)".to_string())
        }
    }
}

fn run_tui<S: KeyValueStorage>(mut store: EntryStore<S>, storage_label: String) -> Result<()> {
    let mut app = App::new(storage_label);
    runtime::load_initial(&mut app, &store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "terminal UI exited with an error");
        eprintln!("Error: {:?}", err);
    }
    info!("stopped");

    res
}
