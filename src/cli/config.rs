//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ScrollConfig};
use crate::prefs::{Language, Theme};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme to store (light or dark)
    #[arg(long, value_name = "THEME", conflicts_with = "reset_theme")]
    theme: Option<String>,

    /// Language to store (en or es)
    #[arg(long, value_name = "CODE", conflicts_with = "reset_language")]
    language: Option<String>,

    /// Forget the stored theme and follow the system again
    #[arg(long)]
    reset_theme: bool,

    /// Forget the stored language and detect it from the locale again
    #[arg(long)]
    reset_language: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    ui: UiOutput,
    scroll: ScrollConfig,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    language: String,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}")))?;

        let output = ConfigOutput {
            config_file: path.display().to_string(),
            ui: UiOutput {
                theme: config.ui.theme.clone().unwrap_or_else(|| "system".to_string()),
                language: config
                    .ui
                    .language
                    .clone()
                    .unwrap_or_else(|| "auto".to_string()),
                show_help_on_startup: config.ui.show_help_on_startup,
            },
            scroll: config.scroll,
        };

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none()
            && self.language.is_none()
            && !self.reset_theme
            && !self.reset_language
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --language, --reset-theme, or --reset-language",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Replacing unreadable configuration: {e:#}");
            Config::default()
        });

        if let Some(theme) = &self.theme {
            let theme: Theme = theme
                .parse()
                .map_err(|e| CliError::validation(format!("Invalid theme: {e}")))?;
            config.ui.theme = Some(theme.as_str().to_string());
        }
        if self.reset_theme {
            config.ui.theme = None;
        }

        if let Some(language) = &self.language {
            let language: Language = language
                .parse()
                .map_err(|e| CliError::validation(format!("Invalid language: {e}")))?;
            config.ui.language = Some(language.code().to_string());
        }
        if self.reset_language {
            config.ui.language = None;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn output_human_readable(output: &ConfigOutput) {
    println!("Configuration file: {}", output.config_file);
    println!();
    println!("UI:");
    println!("  theme:                {}", output.ui.theme);
    println!("  language:             {}", output.ui.language);
    println!("  show_help_on_startup: {}", output.ui.show_help_on_startup);
    println!();
    println!("Scroll:");
    println!("  header_height:     {}", output.scroll.header_height);
    println!("  nav_threshold:     {}", output.scroll.nav_threshold);
    println!("  nav_hysteresis:    {}", output.scroll.nav_hysteresis);
    println!("  activation_margin: {}", output.scroll.activation_margin);
    println!("  row_height_px:     {}", output.scroll.row_height_px);
    println!("  scroll_step_rows:  {}", output.scroll.scroll_step_rows);
}
