//! Style configuration read from `.prettierrc`.
//!
//! Only the options that affect a list of union type aliases are recognized;
//! any other key in the file is ignored so an existing project `.prettierrc`
//! can be shared as-is.
//!
//! invariants:
//!     - A missing file yields the defaults (prettier's own defaults)
//!     - A file that exists but does not parse is an error, never a silent fallback

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse style config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Line ending written between output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    /// Treated as `lf`; output never depends on the host platform
    Auto,
}

/// Formatting options applied by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// Maximum line width before a union is broken over several lines
    pub print_width: usize,

    /// Spaces per indentation level
    pub tab_width: usize,

    /// Indent with tabs instead of spaces
    pub use_tabs: bool,

    /// Terminate declarations with `;`
    pub semi: bool,

    /// Quote string literals with `'` instead of `"`
    pub single_quote: bool,

    pub end_of_line: EndOfLine,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: false,
            semi: true,
            single_quote: false,
            end_of_line: EndOfLine::Lf,
        }
    }
}

impl StyleConfig {
    /// Load the style config at `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no style config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(content)?)
    }

    /// One level of indentation.
    pub fn indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }

    pub fn newline(&self) -> &'static str {
        match self.end_of_line {
            EndOfLine::Lf | EndOfLine::Auto => "\n",
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Cr => "\r",
        }
    }

    pub fn quote(&self) -> char {
        if self.single_quote {
            '\''
        } else {
            '"'
        }
    }

    pub fn terminator(&self) -> &'static str {
        if self.semi {
            ";"
        } else {
            ""
        }
    }
}
