//! Configuration file parsing for keycodegen.toml.
//!
//! The file only names the fixed locations the generator works with: the code
//! table source, the generated declaration file and the prettier style config.
//! Command-line flags override individual entries.
//!
//! invariants:
//!     - Config::load returns default config if keycodegen.toml doesn't exist
//!     - Relative paths are resolved against the project root, never the cwd
//!
//! gotchas:
//!     - A broken keycodegen.toml only produces a warning; the defaults are used

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "keycodegen.toml";

/// Main configuration structure matching keycodegen.toml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Code table source document
    pub input: PathBuf,

    /// Generated declaration file
    pub output: PathBuf,

    /// Prettier-style formatting options (JSON)
    pub style: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("uievents-code/index-source.txt"),
            output: PathBuf::from("index.d.ts"),
            style: PathBuf::from(".prettierrc"),
        }
    }
}

/// Fully resolved file locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub style: PathBuf,
}

impl Config {
    /// Load configuration from keycodegen.toml in the given root directory
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// Resolve every location against `root`.
    pub fn resolve(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            input: resolve_path(root, &self.input),
            output: resolve_path(root, &self.output),
            style: resolve_path(root, &self.style),
        }
    }
}

fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
