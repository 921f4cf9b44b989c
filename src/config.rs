//! Generator configuration.
//!
//! Paths default to the conventional source-tree layout and can be
//! overridden by a shader-embed.toml in the working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name looked up in the working directory
const CONFIG_FILE_NAME: &str = "shader-embed.toml";

fn default_input_dir() -> PathBuf {
    PathBuf::from("src/core/shaders")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("src/core/shader.h")
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for shader source files
    pub input_dir: PathBuf,
    /// Generated header path, overwritten wholesale on every run
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Load config from shader-embed.toml, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }
}
