use std::{fs, path::PathBuf};

use pov_engine::{Format, DEFAULT_GRID_WIDTH, DEFAULT_UNDO_LIMIT, GRID_HEIGHT};
use serde::{Deserialize, Serialize};

/// Persisted user settings (`options.toml` in the config directory)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub default_width: i32,
    pub default_format: Format,

    /// Bounding box of the stretched LED preview
    pub preview_width: i32,
    pub preview_height: i32,

    pub lit_char: char,
    pub unlit_char: char,

    /// Undo steps kept per session
    pub undo_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_GRID_WIDTH,
            default_format: Format::Heart,
            preview_width: DEFAULT_GRID_WIDTH,
            preview_height: GRID_HEIGHT,
            lit_char: '#',
            unlit_char: '.',
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }
}

impl Options {
    pub const FILE_NAME: &'static str = "options.toml";

    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pov_draw").map(|p| p.config_dir().to_path_buf())
    }

    /// Load the options file. Missing or unreadable files yield the defaults;
    /// a missing file is created so the user has something to edit.
    pub fn load() -> Self {
        let Some(dir) = Self::config_dir() else {
            return Self::default();
        };
        if !dir.exists() && fs::create_dir_all(&dir).is_err() {
            log::error!("Can't create configuration directory {:?}", dir);
            return Self::default();
        }

        let options_file = dir.join(Self::FILE_NAME);
        if !options_file.exists() {
            let options = Self::default();
            options.store();
            return options;
        }

        match fs::read_to_string(&options_file) {
            Ok(txt) => match Self::from_toml(&txt) {
                Ok(options) => options,
                Err(err) => {
                    log::error!("Error parsing options file {:?}: {}", options_file, err);
                    Self::default()
                }
            },
            Err(err) => {
                log::error!("Error reading options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn store(&self) {
        let Some(dir) = Self::config_dir() else {
            return;
        };
        match toml::to_string_pretty(self) {
            Ok(text) => {
                if let Err(err) = fs::write(dir.join(Self::FILE_NAME), text) {
                    log::error!("Error writing options file: {}", err);
                }
            }
            Err(err) => log::error!("Error serializing options file: {}", err),
        }
    }

    pub fn from_toml(txt: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(txt)
    }
}
