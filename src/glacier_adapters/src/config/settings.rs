use std::{path::PathBuf, time::Duration};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use super::constants::{LOCAL_SETTINGS_FILE, SETTINGS_FILE, env, prod};

/// Service settings, layered from defaults, optional config files, a `.env`
/// file and `GLACIER__`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GlacierSettings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub log: LogSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime_secs: u64,
    pub idle_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub query_timeout_millis: u64,
    /// Ping each connection before handing it out of the pool.
    pub test_before_acquire: bool,
}

impl PostgresSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        self.url.expose_secret().parse()
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Lower the default filter from `info` to `debug`.
    pub verbose: bool,
    /// Also write JSON formatted events to this file.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Postgres,
    InMemory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

impl GlacierSettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::layered(
            Self::environment(),
            std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
        )
    }

    /// `GLACIER__SECTION__KEY` variables, e.g. `GLACIER__POSTGRES__MAX_CONNECTIONS`.
    pub fn environment() -> Environment {
        Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
            .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
            .separator(env::SETTINGS_ENV_SEPARATOR)
            .try_parsing(true)
    }

    /// Defaults, then config files, then `environment`. A `database_url`
    /// wins over every other source of `postgres.url`.
    pub fn layered(
        environment: Environment,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(File::with_name(LOCAL_SETTINGS_FILE).required(false))
            .add_source(environment)
            .set_override_option("postgres.url", database_url)?
            .build()?
            .try_deserialize()
    }

    /// Builder pre-populated with the built-in defaults and no other source.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.host", prod::APP_HOST)?
            .set_default("application.port", i64::from(prod::APP_PORT))?
            .set_default("postgres.url", prod::postgres::URL)?
            .set_default(
                "postgres.max_connections",
                i64::from(prod::postgres::MAX_CONNECTIONS),
            )?
            .set_default(
                "postgres.min_connections",
                i64::from(prod::postgres::MIN_CONNECTIONS),
            )?
            .set_default(
                "postgres.max_lifetime_secs",
                prod::postgres::MAX_LIFETIME_SECS,
            )?
            .set_default(
                "postgres.idle_timeout_secs",
                prod::postgres::IDLE_TIMEOUT_SECS,
            )?
            .set_default(
                "postgres.acquire_timeout_secs",
                prod::postgres::ACQUIRE_TIMEOUT_SECS,
            )?
            .set_default(
                "postgres.query_timeout_millis",
                prod::postgres::QUERY_TIMEOUT_MILLIS,
            )?
            .set_default("postgres.test_before_acquire", true)?
            .set_default("log.verbose", false)?
            .set_default("storage.backend", "postgres")
    }
}
