//! Player configuration for sortscope-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/sortscope/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sortscope_core::{Algorithm, MAX_SEQUENCE_LEN, MIN_SEQUENCE_LEN};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playback settings (selected algorithm, array size)
    pub playback: PlaybackConfig,
    /// Audio settings (tone volume)
    pub audio: AudioConfig,
}

/// Playback configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Algorithm selected in the picker (saved/restored between sessions)
    pub algorithm: Algorithm,
    /// Array size for the next run
    pub array_size: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            array_size: 256,
        }
    }
}

impl PlaybackConfig {
    /// Array size clamped to the supported range
    pub fn clamped_size(&self) -> usize {
        self.array_size.clamp(MIN_SEQUENCE_LEN, MAX_SEQUENCE_LEN)
    }
}

/// Audio configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Tone channel volume, 0.0 to 1.0
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { volume: 0.10 }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/sortscope/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("sortscope")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - Algorithm: {}, Array size: {}",
                    config.playback.algorithm,
                    config.playback.array_size
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PlayerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.playback.algorithm, Algorithm::Bubble);
        assert_eq!(config.playback.array_size, 256);
        assert!(config.audio.volume > 0.0);
    }

    #[test]
    fn test_size_clamping() {
        let mut playback = PlaybackConfig::default();
        playback.array_size = 1;
        assert_eq!(playback.clamped_size(), MIN_SEQUENCE_LEN);
        playback.array_size = 100_000;
        assert_eq!(playback.clamped_size(), MAX_SEQUENCE_LEN);
        playback.array_size = 300;
        assert_eq!(playback.clamped_size(), 300);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PlayerConfig {
            playback: PlaybackConfig {
                algorithm: Algorithm::Merge,
                array_size: 512,
            },
            audio: AudioConfig { volume: 0.25 },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PlayerConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.playback.algorithm, Algorithm::Merge);
        assert_eq!(parsed.playback.array_size, 512);
        assert_eq!(parsed.audio.volume, 0.25);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: PlayerConfig = serde_yaml::from_str("playback:\n  array_size: 64\n").unwrap();
        assert_eq!(parsed.playback.array_size, 64);
        assert_eq!(parsed.playback.algorithm, Algorithm::Bubble);
    }
}
