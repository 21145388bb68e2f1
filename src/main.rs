//! Skiphire - skip hire checkout wizard

mod app;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use skiphire::catalog::{CatalogMessage, HttpCatalogSource};
use skiphire::config::Config;
use skiphire::constants;
use skiphire::paths;
use skiphire::preferences::{FilePreferenceStore, ThemeContext};
use skiphire::wizard::WizardOptions;

/// Skip hire checkout wizard
#[derive(Parser)]
#[command(name = "skiphire")]
#[command(version = "1.0.0")]
#[command(about = "Skip hire checkout wizard - choose, check and book a waste skip")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Location key sent to the catalog (e.g. "postcode=NR32&area=Lowestoft")
    #[arg(short, long)]
    location: Option<String>,

    /// Catalog endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Step to open the wizard on (1-6)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
    step: Option<u8>,

    /// Catalog position to select automatically once loaded
    #[arg(long)]
    preselect: Option<usize>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the config file, keeping the command-line overrides
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    /// Layer command-line overrides on top of the config file
    fn apply(&self, config: &mut Config) {
        if let Some(location) = &self.location {
            config.catalog.location_key = location.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.catalog.endpoint = endpoint.clone();
        }
        if let Some(step) = self.step {
            config.wizard.initial_step = step;
        }
        if self.preselect.is_some() {
            config.wizard.preselect_index = self.preselect;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging to file
    let log_dir = paths::data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, paths::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("Skiphire starting");

    let mut config = Config::load();
    cli.apply(&mut config);

    match cli.command {
        Some(Commands::Config { save }) => {
            print!("{}", show_config(&config, save, &paths::config_file_path())?);
            Ok(())
        }
        None => run_tui(config).await,
    }
}

/// Render the effective configuration, writing it to `path` when asked
fn show_config(config: &Config, save: bool, path: &Path) -> Result<String> {
    if save {
        config.save_to(path)?;
        tracing::info!("Saved configuration to {}", path.display());
    }
    config.to_toml()
}

async fn run_tui(config: Config) -> Result<()> {
    let source = Arc::new(HttpCatalogSource::from_config(&config.catalog)?);
    let theme = ThemeContext::load(Box::new(FilePreferenceStore::open_default()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(
        WizardOptions::from(&config.wizard),
        theme,
        config.catalog.location_key.clone(),
    );

    // Mount: request the catalog
    let (cat_tx, mut cat_rx) = mpsc::channel::<CatalogMessage>(constants::CATALOG_CHANNEL_SIZE);
    app.start_catalog_load(source, cat_tx);

    // Run the app
    let result = run_app(&mut terminal, &mut app, &mut cat_rx).await;

    // Unmount: an unfinished fetch is aborted with the app
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Wizard failed: {:?}", err);
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    tracing::info!("Skiphire exiting");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cat_rx: &mut mpsc::Receiver<CatalogMessage>,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS);

        tokio::select! {
            biased;  // Prioritize in order: keys, catalog, timeout

            // Terminal key events
            Some(Ok(event)) = event_stream.next() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }
            // Catalog result from the loader task
            Some(msg) = cat_rx.recv() => {
                app.handle_catalog_message(msg);
            }
            // Timeout for spinner animation and redraw
            _ = tokio::time::sleep(timeout) => {}
        }

        // Update spinner animation
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "skiphire",
            "--location",
            "postcode=LE10&area=Hinckley",
            "--step",
            "3",
            "--preselect",
            "2",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.catalog.location_key, "postcode=LE10&area=Hinckley");
        assert_eq!(config.catalog.endpoint, constants::DEFAULT_CATALOG_ENDPOINT);
        assert_eq!(config.wizard.initial_step, 3);
        assert_eq!(config.wizard.preselect_index, Some(2));
    }

    #[test]
    fn test_step_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["skiphire", "--step", "7"]).is_err());
    }

    #[test]
    fn test_config_save_flag() {
        let cli = Cli::parse_from(["skiphire", "config", "--save"]);
        assert!(matches!(cli.command, Some(Commands::Config { save: true })));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skiphire").join("config.toml");
        let mut config = Config::default();
        config.wizard.initial_step = 4;

        let shown = show_config(&config, true, &path).unwrap();
        assert!(shown.contains("initial_step = 4"));
        assert_eq!(Config::load_from(&path).wizard.initial_step, 4);
    }

    #[test]
    fn test_config_without_save_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        show_config(&Config::default(), false, &path).unwrap();
        assert!(!path.exists());
    }
}
