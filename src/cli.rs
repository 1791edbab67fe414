// CLI module - command-line argument parsing and handlers
//
// Flags override config-file and environment values. The config subcommand
// (--show/--reset/--path) runs and exits before the TUI ever starts.

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// vitrine - a testimonial carousel for the terminal
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version = VERSION)]
#[command(about = "Testimonial carousel for the terminal", long_about = None)]
pub struct Cli {
    /// Deck file (TOML); omit to run the bundled sample deck
    pub deck: Option<PathBuf>,

    /// Auto-advance interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Start with auto-advance disabled
    #[arg(long)]
    pub no_auto: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Fold CLI flags into a loaded config (flags win)
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(deck) = &self.deck {
            config.deck = Some(deck.clone());
        }
        if let Some(interval) = self.interval {
            config.interval_ms = interval;
        }
        if self.no_auto {
            config.auto_advance = false;
        }
    }
}

/// Handle the config subcommand if present. Returns true if a command was
/// handled (exit after).
pub fn handle_subcommand(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show usage
                println!("Usage: vitrine config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show   Display effective configuration");
                println!("  --reset  Reset config file to defaults");
                println!("  --path   Show config file path");
            }
            true
        }
        None => false,
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("interval_ms = {}", config.interval_ms);
    println!("auto_advance = {}", config.auto_advance);
    match &config.deck {
        Some(deck) => println!("deck = {:?}", deck.display().to_string()),
        None => println!("# deck = (bundled sample)"),
    }
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file = {}", config.logging.file);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
