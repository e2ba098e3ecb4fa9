//! User configuration.
//!
//! Settings are read from `~/.sidediff/config.json`, or from the path given
//! with `--config`. Every field is optional in the file; missing fields take
//! their defaults.
//!
//! ```json
//! {
//!   "count_mode": "utf16",
//!   "inline_method": "chars",
//!   "context_lines": 3,
//!   "fold_unchanged": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::diff::{DiffOptions, InlineMethod};
use crate::error::ConfigError;
use crate::stats::CountMode;

/// The sidediff state directory name.
pub const CONFIG_DIR: &str = ".sidediff";

/// The config file name.
const CONFIG_FILE: &str = "config.json";

/// Extensions offered by the file prompt. The list is advisory: other files
/// still load, with a warning.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "txt", "md", "js", "ts", "jsx", "tsx", "py", "java", "cpp", "c", "html", "css", "json",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the stats panel counts characters.
    pub count_mode: CountMode,
    /// Granularity of highlights inside changed lines.
    pub inline_method: InlineMethod,
    /// Unchanged lines kept around each change when folding.
    pub context_lines: usize,
    /// Start with unchanged runs folded.
    pub fold_unchanged: bool,
    /// Display width of a tab character in the editors.
    pub tab_length: u8,
    /// Advisory allow-list for the file prompt, without leading dots.
    pub allowed_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count_mode: CountMode::default(),
            inline_method: InlineMethod::default(),
            context_lines: 3,
            fold_unchanged: true,
            tab_length: 4,
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character count mode.
    pub fn with_count_mode(mut self, mode: CountMode) -> Self {
        self.count_mode = mode;
        self
    }

    /// Set the inline highlight granularity.
    pub fn with_inline_method(mut self, method: InlineMethod) -> Self {
        self.inline_method = method;
        self
    }

    /// Set the number of context lines kept around changes.
    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    /// Set whether unchanged runs start folded.
    pub fn with_fold_unchanged(mut self, fold: bool) -> Self {
        self.fold_unchanged = fold;
        self
    }

    /// Path of the default config file, `~/.sidediff/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` (or the default location), falling back to the
    /// defaults on any error. Errors are logged.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(code = e.error_code(), "{}", e);
                    return Self::default();
                }
            },
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), "{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Diff options derived from this config.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            inline_method: self.inline_method,
            context_lines: self.context_lines,
            fold_unchanged: self.fold_unchanged,
        }
    }

    /// Whether `path` has one of the allowed extensions (case-insensitive).
    pub fn is_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.allowed_extensions
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
