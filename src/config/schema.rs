use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/movmusic/config.toml` or `~/.config/movmusic/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `MOVMUSIC__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub naming: NamingSettings,
    pub relocate: RelocateSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File name suffix that marks a candidate, matched case-insensitively.
    /// A missing leading dot is added.
    pub extension: String,
    /// Whether to follow symlinks while enumerating.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extension: ".mp3".to_string(),
            follow_links: false,
            include_hidden: true,
            recursive: false,
            max_depth: None,
        }
    }
}

impl LibrarySettings {
    /// The configured extension, trimmed and with exactly one leading dot.
    pub fn extension_suffix(&self) -> String {
        format!(".{}", self.extension.trim().trim_start_matches('.'))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Name files after their title tag when it yields a safe file name.
    /// When off, every file goes through the heuristic cleaner.
    pub use_title_tag: bool,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            use_title_tag: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelocateSettings {
    /// Replace an existing file at the target path instead of skipping.
    pub overwrite: bool,
    /// Create the destination directory when it does not exist.
    pub create_destination: bool,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

impl Default for RelocateSettings {
    fn default() -> Self {
        Self {
            overwrite: false,
            create_destination: true,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Print a line per renamed or moved file instead of phase banners.
    pub verbose: bool,
}
