// Configuration for the carousel
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/vitrine/config.toml)
// 3. Built-in defaults (lowest priority)
//
// CLI flags are applied on top of all of these in main.rs.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default auto-advance interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Shortest interval we accept; anything lower makes slides unreadable and
/// a zero interval would panic the tokio timer
const MIN_INTERVAL_MS: u64 = 250;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files (logs can't go to the terminal
    /// while the alternate screen is up)
    pub file: bool,

    /// Directory for log files
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Auto-advance interval in milliseconds
    pub interval_ms: u64,

    /// Whether auto-advance starts running at launch
    pub auto_advance: bool,

    /// Deck file to load; None means the bundled sample deck
    pub deck: Option<PathBuf>,

    /// Theme name: "midnight", "paper", "ember"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file: Option<bool>,
    file_dir: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    interval_ms: Option<u64>,
    auto_advance: Option<bool>,
    deck: Option<String>,
    theme: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/vitrine/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("vitrine").join("config.toml"))
    }

    /// Auto-advance interval as a Duration, clamped to the supported minimum
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let deck_line = match &self.deck {
            Some(path) => format!("deck = \"{}\"", toml_escape(&path.display().to_string())),
            None => "# deck = \"/path/to/deck.toml\"".to_string(),
        };

        format!(
            r#"# vitrine configuration

# Auto-advance interval in milliseconds
interval_ms = {interval}

# Whether auto-advance runs at launch (any manual interaction stops it)
auto_advance = {auto}

# Deck file; omit to use the bundled sample deck
{deck_line}

# Theme: midnight, paper, ember (press 't' in the TUI to cycle)
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides the level)
[logging]
level = "{log_level}"
file = {log_file}
file_dir = "{log_dir}"
"#,
            interval = self.interval_ms,
            auto = self.auto_advance,
            deck_line = deck_line,
            theme = toml_escape(&self.theme),
            log_level = toml_escape(&self.logging.level),
            log_file = self.logging.file,
            log_dir = toml_escape(&self.logging.file_dir.display().to_string()),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Interval: env > file > default
        let interval_ms = std::env::var("VITRINE_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.interval_ms)
            .unwrap_or(DEFAULT_INTERVAL_MS);

        // Auto-advance toggle: env (VITRINE_NO_AUTO=1 disables) > file > default
        let auto_advance = std::env::var("VITRINE_NO_AUTO")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .ok()
            .or(file.auto_advance)
            .unwrap_or(true);

        // Deck path: env > file > none (sample deck)
        let deck = std::env::var("VITRINE_DECK")
            .ok()
            .or(file.deck)
            .map(PathBuf::from);

        // Theme: env > file > default
        let theme = std::env::var("VITRINE_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "midnight".to_string());

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file: file_logging.file.unwrap_or(defaults.file),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
        };

        Self {
            interval_ms,
            auto_advance,
            deck,
            theme,
            logging,
        }
    }
}

/// Escape a string for use inside a quoted TOML value. Backslashes (Windows
/// paths) and embedded quotes would otherwise break the generated file.
fn toml_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            auto_advance: true,
            deck: None,
            theme: "midnight".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}
