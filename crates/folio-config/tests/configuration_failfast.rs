//! Loading must fail loudly on malformed configuration sources.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use tempfile::TempDir;

use folio_config::Config;
use ortho_config::OrthoConfig;

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
    guard: Option<MutexGuard<'static, ()>>,
}

impl EnvOverride {
    fn set_var(key: &'static str, value: &OsStr) -> Self {
        let guard = ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = std::env::var_os(key);
        unsafe { std::env::set_var(key, value) };
        Self {
            key,
            previous,
            guard: Some(guard),
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            None => unsafe { std::env::remove_var(self.key) },
        }
        drop(self.guard.take());
    }
}

fn load_with_file(contents: &str) -> Result<Config, String> {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("folio.toml");
    fs::write(&path, contents).expect("write config");
    let args = vec![
        OsString::from("folio"),
        OsString::from("--config-path"),
        path.into_os_string(),
    ];
    Config::load_from_iter(args).map_err(|error| error.to_string())
}

#[test]
fn unknown_input_format_is_rejected() {
    let error = load_with_file(r#"input_formats = ["xml"]"#).expect_err("xml is not a format");
    assert!(!error.is_empty());
}

#[test]
fn malformed_toml_is_rejected() {
    let error = load_with_file("log_filter = ").expect_err("toml must parse");
    assert!(!error.is_empty());
}

#[test]
fn non_numeric_body_limit_from_environment_is_rejected() {
    let _env = EnvOverride::set_var("FOLIO_MAX_BODY_BYTES", OsStr::new("lots"));
    let error = Config::load_from_iter([OsString::from("folio")])
        .expect_err("body limit must be numeric");
    assert!(!error.to_string().is_empty());
}

#[test]
fn valid_file_loads_every_field() {
    let config = load_with_file(
        "log_filter = \"folio-input=debug\"\n\
         log_format = \"compact\"\n\
         input_formats = [\"json\"]\n\
         max_body_bytes = 2048\n\
         enveloped_bodies = true\n",
    )
    .expect("valid configuration");
    assert_eq!(config.log_filter(), "folio-input=debug");
    assert_eq!(config.log_format(), folio_config::LogFormat::Compact);
    assert_eq!(config.input_formats(), vec![folio_config::InputFormat::Json]);
    assert_eq!(config.max_body_bytes(), 2048);
    assert!(config.enveloped_bodies());
}
