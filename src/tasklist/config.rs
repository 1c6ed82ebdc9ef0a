use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE: &str = "database.json";
const DEFAULT_OWNER: &str = "Ranim Harmouch";

/// Settings read from `config.json` in the home directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Name shown in the startup banner
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Task file used when none is given on the command line
    #[serde(default = "default_database")]
    pub database: String,

    /// Show a done marker next to each task in `list`
    #[serde(default)]
    pub show_status: bool,
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            database: default_database(),
            show_status: false,
        }
    }
}

impl AppConfig {
    /// Load config from `path`, or return defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TaskError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| TaskError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Resolves file locations against a home directory.
///
/// The home directory defaults to the directory holding the running
/// executable, so a relative database path means "next to the program", not
/// "next to wherever the shell happens to be".
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub home: PathBuf,
}

impl AppPaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Uses `home` if given, otherwise the program directory.
    pub fn resolve(home: Option<PathBuf>) -> Self {
        Self::new(home.unwrap_or_else(program_dir))
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILENAME)
    }

    /// The task file: the command-line argument if given, otherwise the
    /// configured default. Absolute paths are kept as they are.
    pub fn database(&self, arg: Option<&Path>, config: &AppConfig) -> PathBuf {
        match arg {
            Some(path) => self.home.join(path),
            None => self.home.join(&config.database),
        }
    }
}

fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
