use std::{
    fs,
    path::{Path, PathBuf},
};

use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub rows: i32,
    pub cols: i32,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default)]
    pub origin: (i32, i32),
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_true")]
    pub solve: bool,
    #[serde(default = "default_true")]
    pub print: bool,
}

fn default_cell_size() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 12,
            cell_size: default_cell_size(),
            origin: (50, 50),
            seed: None,
            solve: true,
            print: true,
        }
    }
}

impl Settings {
    pub fn default_path() -> Result<PathBuf, Error> {
        dirs::preference_dir()
            .map(|dir| dir.join("maze-solver").join("settings.ron"))
            .ok_or(Error::NoConfigDir)
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(text)?)
    }

    /// Reads settings from `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            Self::reset(path)?;
            return Self::parse(DEFAULT_SETTINGS);
        }

        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn reset(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        log::info!("wrote default settings to {}", path.display());
        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, Error> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}
