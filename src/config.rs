//! Glyph configuration, loaded from JSON.
//!
//! Every key is optional; anything missing falls back to the plain ASCII
//! defaults.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub player: String,
    pub alien: String,
    pub wall: String,
    pub dot: String,
    pub laser: String,
    pub death: String,
    pub space: String,
    /// Emoji glyphs are two terminal columns wide.
    pub use_emoji: bool,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            player: "A".into(),
            alien: "Y".into(),
            wall: "#".into(),
            dot: ".".into(),
            laser: "|".into(),
            death: "X".into(),
            space: " ".into(),
            use_emoji: false,
        }
    }
}

impl GlyphConfig {
    /// Terminal columns taken by one grid cell.
    pub fn cell_width(&self) -> u16 {
        if self.use_emoji {
            2
        } else {
            1
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded glyph config {} (emoji: {})", path.display(), cfg.use_emoji);
        Ok(cfg)
    }
}
