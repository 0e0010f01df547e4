use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{APP_NAME, CONFIG_FILE};

/// User defaults for the reporting flags
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(config_paths: &[PathBuf]) -> Self {
        // First file that parses wins
        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match Self::parse(&content, path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str, path: &Path) -> Result<Self, toml::de::Error> {
        let mut config = toml::from_str::<Config>(content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/pyfile/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join(CONFIG_FILE));
        }

        // 2. Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_NAME).join(CONFIG_FILE);
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.pyfile.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}
