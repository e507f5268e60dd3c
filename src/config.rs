//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/wortuhr/config.json` or the path passed with
//! `--config <path>`.  Only the presentation is configurable; the clock
//! face and its rules are fixed.
//!
//! # Example
//!
//! ```json
//! {
//!   "layout": { "char_width": 12, "line_height": 15, "top": 2 },
//!   "terminal": {
//!     "columns": 11,
//!     "letter_spacing": 1,
//!     "color": true,
//!     "clear_screen": true,
//!     "emphasized_sgr": "1;97",
//!     "dimmed_sgr": "90"
//!   }
//! }
//! ```

use crate::grid::{MAX_COLS, PHRASES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional, a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Letter placement on the draw surface.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Settings for the ANSI terminal surface.
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Letter placement, in surface units.
///
/// The defaults are the pixel metrics of a 144 px wide watch face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal advance per letter.
    pub char_width: i32,
    /// Vertical advance per row.
    pub line_height: i32,
    /// Y coordinate of the first row.
    pub top: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            char_width: 12,
            line_height: 15,
            top: 2,
        }
    }
}

/// ANSI terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Surface width in letter cells.  Wider than the grid centres it.
    pub columns: usize,
    /// Blank terminal columns after every letter.
    pub letter_spacing: usize,
    /// Use SGR colours.  Without colour, dark letters are printed in
    /// lower case.
    pub color: bool,
    /// Clear the screen before every frame.
    pub clear_screen: bool,
    /// SGR parameters for lit letters.
    pub emphasized_sgr: String,
    /// SGR parameters for dark letters.
    pub dimmed_sgr: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            columns: 11,
            letter_spacing: 1,
            color: true,
            clear_screen: true,
            emphasized_sgr: "1;97".into(),
            dimmed_sgr: "90".into(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject metrics the renderer cannot place letters with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.char_width <= 0 || self.layout.line_height <= 0 {
            return Err(ConfigError(format!(
                "char_width and line_height must be positive (got {} and {})",
                self.layout.char_width, self.layout.line_height
            )));
        }
        let width = i32::try_from(MAX_COLS)
            .ok()
            .and_then(|cols| cols.checked_mul(self.layout.char_width));
        if width.is_none() {
            return Err(ConfigError(format!(
                "char_width {} is too large for {} letters per row",
                self.layout.char_width, MAX_COLS
            )));
        }
        let height = i32::try_from(PHRASES.len())
            .ok()
            .and_then(|rows| rows.checked_mul(self.layout.line_height))
            .and_then(|h| h.checked_add(self.layout.top));
        if height.is_none() {
            return Err(ConfigError(format!(
                "line_height {} with top {} is too large for {} rows",
                self.layout.line_height,
                self.layout.top,
                PHRASES.len()
            )));
        }
        Ok(())
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "layout": { "char_width": 10, "line_height": 20, "top": 0 },
            "terminal": {
                "columns": 15,
                "letter_spacing": 0,
                "color": false,
                "clear_screen": false,
                "emphasized_sgr": "1;33",
                "dimmed_sgr": "2"
            }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.layout.char_width, 10);
        assert_eq!(cfg.layout.line_height, 20);
        assert_eq!(cfg.layout.top, 0);
        assert_eq!(cfg.terminal.columns, 15);
        assert_eq!(cfg.terminal.letter_spacing, 0);
        assert!(!cfg.terminal.color);
        assert!(!cfg.terminal.clear_screen);
        assert_eq!(cfg.terminal.emphasized_sgr, "1;33");
        assert_eq!(cfg.terminal.dimmed_sgr, "2");
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.layout, LayoutConfig::default());
        assert_eq!(cfg.terminal, TerminalConfig::default());
    }

    #[test]
    fn deserialize_partial_layout() {
        let json = r#"{ "layout": { "char_width": 8 } }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.layout.char_width, 8);
        assert_eq!(cfg.layout.line_height, LayoutConfig::default().line_height);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "layout": {}, "future_section": { "key": 42 } }"#;
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn zero_char_width_rejected() {
        let cfg: Config = serde_json::from_str(r#"{ "layout": { "char_width": 0 } }"#).unwrap();
        assert!(cfg.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn oversized_metrics_rejected() {
        let cfg: Config = serde_json::from_str(r#"{ "layout": { "char_width": 300000000 } }"#).unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("char_width 300000000"));

        let cfg: Config = serde_json::from_str(r#"{ "layout": { "line_height": 300000000 } }"#).unwrap();
        assert!(cfg.validate().is_err());

        let cfg: Config = serde_json::from_str(r#"{ "layout": { "top": 2147483647 } }"#).unwrap();
        assert!(cfg.validate().is_err());

        let cfg: Config = serde_json::from_str(r#"{ "layout": { "char_width": 100000 } }"#).unwrap();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn load_rejects_oversized_metrics() {
        let path = std::env::temp_dir().join(format!("wortuhr-oversized-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "layout": { "char_width": 300000000 } }"#).unwrap();
        assert!(Config::load(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("wortuhr-missing-{}.json", std::process::id()));
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("wortuhr-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "terminal": { "color": false } }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert!(!cfg.terminal.color);
        let _ = std::fs::remove_file(&path);
    }
}
