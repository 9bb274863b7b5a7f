use std::ffi::OsString;
use std::sync::Mutex;

use glyph_config::{discover_config_path, load, GlyphConfig, GLYPH_CONFIG_ENV_VAR};
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EnvVarGuard {
    key: &'static str,
    prev: Option<OsString>,
}

impl EnvVarGuard {
    fn set(key: &'static str, value: &std::path::Path) -> Self {
        let prev = std::env::var_os(key);
        std::env::set_var(key, value);
        Self { key, prev }
    }

    fn unset(key: &'static str) -> Self {
        let prev = std::env::var_os(key);
        std::env::remove_var(key);
        Self { key, prev }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

#[test]
fn discovers_glyph_toml_in_working_dir() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(GLYPH_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("glyph.toml");
    std::fs::write(&config_path, "[search]\nprecision = \"none\"\n").unwrap();

    assert_eq!(discover_config_path(dir.path()), Some(config_path));
}

#[test]
fn env_override_wins_over_working_dir_file() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("glyph.toml"), "[logging]\nlevel = \"warn\"\n").unwrap();
    let override_path = dir.path().join("override.toml");
    std::fs::write(&override_path, "[logging]\nlevel = \"trace\"\n").unwrap();
    let _env = EnvVarGuard::set(GLYPH_CONFIG_ENV_VAR, &override_path);

    let (config, loaded) = load(None, dir.path()).unwrap();
    assert_eq!(loaded.as_deref(), Some(override_path.as_path()));
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn explicit_path_wins_over_env() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");

    let dir = tempdir().unwrap();
    let env_path = dir.path().join("env.toml");
    std::fs::write(&env_path, "[logging]\nlevel = \"trace\"\n").unwrap();
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[logging]\nlevel = \"error\"\n").unwrap();
    let _env = EnvVarGuard::set(GLYPH_CONFIG_ENV_VAR, &env_path);

    let (config, loaded) = load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(loaded.as_deref(), Some(explicit.as_path()));
    assert_eq!(config.logging.level, "error");
}

#[test]
fn no_config_means_defaults() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(GLYPH_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    let (config, loaded) = load(None, dir.path()).unwrap();
    assert_eq!(loaded, None);
    assert_eq!(config, GlyphConfig::default());
}

#[test]
fn env_pointing_at_missing_file_is_an_error() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");

    let dir = tempdir().unwrap();
    let _env = EnvVarGuard::set(GLYPH_CONFIG_ENV_VAR, &dir.path().join("missing.toml"));

    assert!(load(None, dir.path()).is_err());
}
