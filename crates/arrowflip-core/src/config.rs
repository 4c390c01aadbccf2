use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory for conversion options.
pub const CONFIG_FILE_NAME: &str = ".arrowflip.json";

/// Options controlling how converted bodies are laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Extra indentation added inside a synthesized `return (` wrapper,
    /// and removed again when unwrapping one.
    pub indent_width: usize,

    /// Line-comment marker used for statements dropped from a block body.
    pub comment_marker: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            comment_marker: "//".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Load options from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `.arrowflip.json` from `cwd`, or fall back to defaults.
    pub fn discover(cwd: &Path) -> Result<Self, Error> {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The indentation string inserted by one wrapping level.
    #[must_use]
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

/// Runtime configuration for the arrowflip CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Current working directory.
    pub cwd: PathBuf,

    /// Whether to emit JSON logs.
    pub json_logs: bool,

    /// Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE).
    pub verbosity: u8,

    /// Conversion layout options.
    pub options: ConvertOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            json_logs: false,
            verbosity: 0,
            options: ConvertOptions::default(),
        }
    }
}

impl Config {
    /// Create a new config with the given working directory.
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            ..Default::default()
        }
    }

    /// Set verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON log output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Set conversion options.
    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }
}
