use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::error::Error;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_movmusic_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MOVMUSIC_CONFIG_PATH", "/tmp/movmusic-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/movmusic-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("movmusic")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("movmusic")
            .join("config.toml")
    );
}

#[test]
fn defaults_clean_mp3_in_place_without_recursion() {
    let s = Settings::default();
    assert_eq!(s.library.extension, ".mp3");
    assert!(!s.library.recursive);
    assert!(s.naming.use_title_tag);
    assert!(!s.relocate.overwrite);
    assert!(!s.relocate.dry_run);
    assert!(!s.output.verbose);
    assert!(s.validate().is_ok());
}

#[test]
fn extension_suffix_normalizes_leading_dot() {
    let mut lib = LibrarySettings::default();
    assert_eq!(lib.extension_suffix(), ".mp3");
    lib.extension = "flac".into();
    assert_eq!(lib.extension_suffix(), ".flac");
    lib.extension = " ..ogg ".into();
    assert_eq!(lib.extension_suffix(), ".ogg");
}

#[test]
fn validate_rejects_empty_and_separator_extensions() {
    let mut s = Settings::default();
    s.library.extension = ".".into();
    assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));

    s.library.extension = "mp3/x".into();
    assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));

    s.library.extension = "mp3".into();
    s.library.max_depth = Some(0);
    assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extension = "flac"
recursive = true
include_hidden = false
follow_links = true
max_depth = 3

[naming]
use_title_tag = false

[relocate]
overwrite = true
create_destination = false
dry_run = true

[output]
verbose = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MOVMUSIC_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MOVMUSIC__LIBRARY__EXTENSION");

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.extension, "flac");
    assert!(s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert!(!s.naming.use_title_tag);
    assert!(s.relocate.overwrite);
    assert!(!s.relocate.create_destination);
    assert!(s.relocate.dry_run);
    assert!(s.output.verbose);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extension = ".mp3"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MOVMUSIC_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MOVMUSIC__LIBRARY__EXTENSION", ".ogg");

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.extension, ".ogg");
}

#[test]
fn explicit_config_path_must_exist() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        Settings::load(Some(missing.as_path())),
        Err(Error::Config(_))
    ));
}

#[test]
fn missing_default_config_file_yields_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let _g1 = EnvGuard::set("MOVMUSIC_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("MOVMUSIC__LIBRARY__EXTENSION");

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.extension, ".mp3");
    assert!(!s.library.recursive);
}
