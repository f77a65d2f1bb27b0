//! Folio - terminal portfolio viewer
//!
//! Launches the interactive viewer, or runs one of the headless subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use folio::branding::{APP_BINARY_NAME, APP_DISPLAY_NAME};
use folio::cli::{CliError, ConfigArgs, ProjectsArgs};
use folio::config::Config;
use folio::i18n::Translator;
use folio::logging::{self, LogTarget};
use folio::prefs::{ConfigStorage, Language, PreferenceStore, SystemHints};
use folio::router::Route;
use folio::tui::{self, AppState, SystemClipboard};

/// Folio - terminal portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Address to open, e.g. `/project/3`
    #[arg(value_name = "ROUTE", default_value = "/")]
    route: String,

    /// Language for this session (en or es); overrides the stored language
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show or change stored preferences
    Config(ConfigArgs),
    /// List showcased projects
    Projects(ProjectsArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(command) => run_command(command, cli.verbose),
        None => run_viewer(&cli).map_err(|e| CliError::io(format!("{e:#}"))),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code.code());
    }
}

fn run_command(command: &Commands, verbose: bool) -> Result<(), CliError> {
    if let Err(e) = logging::init(LogTarget::Stderr, verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    match command {
        Commands::Config(args) => args.execute(),
        Commands::Projects(args) => args.execute(),
    }
}

fn run_viewer(cli: &Cli) -> Result<()> {
    if let Err(e) = logging::init(LogTarget::File, cli.verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let session_language = cli
        .lang
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()
        .with_context(|| format!("Run `{APP_BINARY_NAME} --help` for usage"))?;

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {e:#}");
        Config::default()
    });
    let route = Route::parse(&cli.route);

    let store = PreferenceStore::initialize(ConfigStorage::open()?, &SystemHints::detect());
    if let Some(language) = session_language {
        store.override_language(language);
    }

    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "{APP_DISPLAY_NAME} needs an interactive terminal; \
             use `{APP_BINARY_NAME} projects` for plain output"
        );
    }

    tracing::info!(%route, "Starting {APP_DISPLAY_NAME} v{}", env!("CARGO_PKG_VERSION"));

    let mut terminal = tui::setup_terminal()?;
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut state = AppState::new(
        store,
        Translator::bundled(),
        &config,
        route,
        Box::new(SystemClipboard),
        (size.width, size.height),
    );

    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}
