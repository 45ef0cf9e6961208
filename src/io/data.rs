//! `data.json` game definition: levels, canvas size and asset manifest

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{GameError, Result, invalid_level};
use crate::spatial::tiles::LETTER_KINDS;

/// Parameters of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    /// Board rows
    pub rows: usize,
    /// Board columns
    pub cols: usize,
    /// Distinct tile kinds dealt onto the board
    pub num_animal_types: usize,
    /// Time allowed to clear the board
    pub time_limit_seconds: u64,
    /// Factor applied to every point earned on this level
    pub score_multiplier: f64,
}

impl LevelConfig {
    /// Number of tile pairs dealt onto the board
    pub const fn pairs(&self) -> usize {
        self.rows * self.cols / 2
    }

    /// Check the level can produce a fully paired board
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLevel`] naming the first violated rule
    pub fn validate(&self, level: usize) -> Result<()> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value > MAX_BOARD_DIMENSION {
                return Err(invalid_level(
                    level,
                    &format!("{name} = {value} must be between 1 and {MAX_BOARD_DIMENSION}"),
                ));
            }
        }
        if (self.rows * self.cols) % 2 != 0 {
            return Err(invalid_level(
                level,
                &format!("{}x{} board has an odd cell count", self.rows, self.cols),
            ));
        }
        if self.num_animal_types == 0 || self.num_animal_types > self.pairs() {
            return Err(invalid_level(
                level,
                &format!(
                    "numAnimalTypes = {} must be between 1 and {}",
                    self.num_animal_types,
                    self.pairs()
                ),
            ));
        }
        if self.num_animal_types > usize::from(LETTER_KINDS) {
            return Err(invalid_level(
                level,
                &format!(
                    "numAnimalTypes = {} exceeds the {LETTER_KINDS} drawable kinds",
                    self.num_animal_types
                ),
            ));
        }
        if self.time_limit_seconds == 0 {
            return Err(invalid_level(level, &"timeLimitSeconds must be positive"));
        }
        if !self.score_multiplier.is_finite() || self.score_multiplier <= 0.0 {
            return Err(invalid_level(
                level,
                &format!(
                    "scoreMultiplier = {} must be a positive number",
                    self.score_multiplier
                ),
            ));
        }
        Ok(())
    }
}

/// Drawing surface size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Image entry of the asset manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Lookup name
    pub name: String,
    /// Path relative to the data file
    pub path: PathBuf,
    /// Draw width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Draw height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

/// Audio entry of the asset manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundAsset {
    /// Lookup name
    pub name: String,
    /// Path relative to the data file
    pub path: PathBuf,
    /// Clip length in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Playback volume between 0 and 1
    #[serde(default)]
    pub volume: Option<f64>,
}

/// Complete game definition loaded from `data.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    /// Optional canvas dimensions
    #[serde(default)]
    pub canvas: Option<CanvasConfig>,
    /// Image manifest
    #[serde(default)]
    pub images: Vec<ImageAsset>,
    /// Sound manifest
    #[serde(default)]
    pub sounds: Vec<SoundAsset>,
    /// Levels in play order
    pub levels: Vec<LevelConfig>,
}

impl GameData {
    /// Parse and validate a game definition from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any level is invalid
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        let data: Self = serde_json::from_str(text).map_err(|e| GameError::ConfigParse {
            path: origin.to_path_buf(),
            source: e,
        })?;
        data.validate()?;
        Ok(data)
    }

    /// Read, parse and validate a game definition file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or
    /// contains an invalid level
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GameError::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let data = Self::from_json(&text, path)?;
        tracing::debug!(
            path = %path.display(),
            levels = data.levels.len(),
            images = data.images.len(),
            sounds = data.sounds.len(),
            "loaded game data"
        );
        Ok(data)
    }

    /// Check there is at least one level and every level is playable
    ///
    /// # Errors
    ///
    /// Returns an error for an empty level list or the first invalid level
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(GameError::InvalidParameter {
                parameter: "levels",
                value: "[]".to_string(),
                reason: "at least one level is required".to_string(),
            });
        }
        for (index, level) in self.levels.iter().enumerate() {
            level.validate(index)?;
        }
        Ok(())
    }

    /// Check every manifest entry exists relative to `base_dir`
    ///
    /// All entries are checked before reporting; the first missing one is
    /// returned as the error so a run never starts with partial assets.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MissingAsset`] for the first missing file
    pub fn verify_assets(&self, base_dir: &Path) -> Result<usize> {
        let entries = self
            .images
            .iter()
            .map(|image| (&image.name, &image.path))
            .chain(self.sounds.iter().map(|sound| (&sound.name, &sound.path)));

        let mut missing = Vec::new();
        let mut found = 0;
        for (name, path) in entries {
            let resolved = base_dir.join(path);
            if resolved.is_file() {
                found += 1;
            } else {
                tracing::warn!(asset = %name, path = %resolved.display(), "asset missing");
                missing.push(GameError::MissingAsset {
                    name: name.clone(),
                    path: resolved,
                });
            }
        }

        match missing.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(found),
        }
    }
}
