use std::path::Path;

use crate::config;

pub fn load_settings(explicit: Option<&Path>) -> config::Settings {
    match config::Settings::load(explicit) {
        Ok(s) => {
            if let Err(e) = s.validate() {
                tracing::warn!("{e}; using defaults");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            tracing::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
