use std::{
    env,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `MOVMUSIC__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from an optional config file and the environment.
    ///
    /// An `explicit` path must exist; the resolved default path may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        match explicit {
            Some(path) => {
                builder = builder.add_source(::config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = resolve_config_path() {
                    builder =
                        builder.add_source(::config::File::from(path.as_path()).required(false));
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MOVMUSIC")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        let ext = self.library.extension.trim().trim_start_matches('.');
        if ext.is_empty() {
            return Err(Error::InvalidSettings(
                "library.extension must not be empty".to_string(),
            ));
        }
        if ext.contains(['/', '\\']) {
            return Err(Error::InvalidSettings(format!(
                "library.extension must not contain a path separator: {ext}"
            )));
        }
        if self.library.max_depth == Some(0) {
            return Err(Error::InvalidSettings(
                "library.max_depth must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `MOVMUSIC_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MOVMUSIC_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/movmusic/config.toml`
/// or `~/.config/movmusic/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("movmusic").join("config.toml"))
}
