use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "HERALD_ENV";
const CONFIG_DIR_ENV: &str = "HERALD_CONFIG_DIR";
const DEFAULT_PREFIX: &str = "log";

/// Deployment environment selecting the configuration overlay.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    /// Prefix the binaries build their wrapper with
    #[serde(default = "Settings::default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    fn default_prefix() -> String {
        DEFAULT_PREFIX.to_string()
    }

    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .with_context(|| "unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from `config_dir` using the overlay for `environment`.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let parsed = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix("HERALD")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = parsed;

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            prefix: Self::default_prefix(),
            telemetry: TelemetrySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Fallback filter directive when `RUST_LOG` is unset
    #[serde(default = "TelemetrySettings::default_level")]
    pub level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    const HERALD_VARS: &[&str] = &[
        ENV_VAR_NAME,
        CONFIG_DIR_ENV,
        "HERALD_PREFIX",
        "HERALD_TELEMETRY__LOG_FORMAT",
        "HERALD_TELEMETRY__LEVEL",
    ];

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes access to the process environment and clears every
    /// `HERALD_*` variable the tests touch, before and after.
    struct CleanEnv {
        _lock: MutexGuard<'static, ()>,
    }

    impl CleanEnv {
        fn new() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            clear_herald_vars();
            Self { _lock: lock }
        }

        fn set(&self, key: &str, value: impl AsRef<std::ffi::OsStr>) {
            std::env::set_var(key, value);
        }
    }

    impl Drop for CleanEnv {
        fn drop(&mut self) {
            clear_herald_vars();
        }
    }

    fn clear_herald_vars() {
        for var in HERALD_VARS {
            std::env::remove_var(var);
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "herald-settings-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_prefix_is_log() {
        let settings = Settings::default();
        assert_eq!(settings.prefix, "log");
        assert_eq!(settings.telemetry.level, "warn");
    }

    #[test]
    fn overlay_file_overrides_base() {
        let _env = CleanEnv::new();
        let dir = scratch_dir("overlay");
        fs::write(dir.join("base.toml"), "prefix = \"base\"\n").unwrap();
        fs::write(
            dir.join("staging.toml"),
            "prefix = \"trace\"\n[telemetry]\nlog_format = \"json\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&dir, "staging").unwrap();

        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.prefix, "trace");
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let _env = CleanEnv::new();
        let dir = scratch_dir("empty");

        let settings = Settings::load_from(&dir, "local").unwrap();

        assert_eq!(settings.prefix, "log");
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn nested_env_vars_override_files() {
        let env = CleanEnv::new();
        let dir = scratch_dir("nested-env");
        fs::write(
            dir.join("base.toml"),
            "prefix = \"base\"\n[telemetry]\nlevel = \"info\"\n",
        )
        .unwrap();
        env.set("HERALD_PREFIX", "from-env");
        env.set("HERALD_TELEMETRY__LOG_FORMAT", "json");

        let settings = Settings::load_from(&dir, "local").unwrap();

        assert_eq!(settings.prefix, "from-env");
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);
        assert_eq!(settings.telemetry.level, "info");
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_reads_environment_and_config_dir_from_env() {
        let env = CleanEnv::new();
        let dir = scratch_dir("load");
        fs::write(dir.join("base.toml"), "prefix = \"base\"\n").unwrap();
        fs::write(dir.join("production.toml"), "prefix = \"prod\"\n").unwrap();
        env.set(ENV_VAR_NAME, "production");
        env.set(CONFIG_DIR_ENV, &dir);

        let settings = Settings::load().unwrap();

        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.prefix, "prod");
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_rejects_unknown_environment_from_env() {
        let env = CleanEnv::new();
        env.set(ENV_VAR_NAME, "qa");

        let err = Settings::load().unwrap_err();

        assert!(err.to_string().contains("unsupported environment 'qa'"));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let dir = scratch_dir("unknown");
        assert!(Settings::load_from(&dir, "qa").is_err());
        fs::remove_dir_all(dir).ok();
    }
}
