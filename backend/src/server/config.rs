//! Environment-driven server configuration.

use std::net::{IpAddr, SocketAddr};

use mockable::Env;
use tracing::warn;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const PORT_ENV: &str = "PORT";
const BIND_HOST_ENV: &str = "BIND_HOST";
const POOL_MAX_SIZE_ENV: &str = "DB_POOL_MAX_SIZE";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

const PORT_EXPECTED: &str = "an integer between 1 and 65535";
const HOST_EXPECTED: &str = "an IPv4 or IPv6 address";
const POOL_EXPECTED: &str = "a positive integer";

/// Build mode for configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to an in-memory store when no database is set.
    Debug,
    /// Release builds require a database.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Where user records live.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Storage {
    /// PostgreSQL reached through a pooled async connection.
    Postgres {
        database_url: String,
        pool_max_size: u32,
    },
    /// Process-local store, lost on restart.
    InMemory,
}

/// Settings needed to start the HTTP server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage: Storage,
}

impl ServerConfig {
    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured storage backend.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

/// Errors raised while reading server configuration.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum ServerConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build the server configuration from environment variables.
pub fn server_config_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<ServerConfig, ServerConfigError> {
    let host = host_from_env(env)?;
    let port = port_from_env(env)?;
    let storage = storage_from_env(env, mode)?;

    Ok(ServerConfig {
        bind_addr: SocketAddr::new(host, port),
        storage,
    })
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn host_from_env<E: Env>(env: &E) -> Result<IpAddr, ServerConfigError> {
    let value = non_blank(env, BIND_HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_owned());
    value
        .parse()
        .map_err(|_| ServerConfigError::InvalidEnv {
            name: BIND_HOST_ENV,
            value,
            expected: HOST_EXPECTED,
        })
}

fn port_from_env<E: Env>(env: &E) -> Result<u16, ServerConfigError> {
    let Some(value) = non_blank(env, PORT_ENV) else {
        return Ok(DEFAULT_PORT);
    };
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ServerConfigError::InvalidEnv {
            name: PORT_ENV,
            value,
            expected: PORT_EXPECTED,
        }),
    }
}

fn pool_max_size_from_env<E: Env>(env: &E) -> Result<u32, ServerConfigError> {
    let Some(value) = non_blank(env, POOL_MAX_SIZE_ENV) else {
        return Ok(DEFAULT_POOL_MAX_SIZE);
    };
    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ServerConfigError::InvalidEnv {
            name: POOL_MAX_SIZE_ENV,
            value,
            expected: POOL_EXPECTED,
        }),
    }
}

fn storage_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Storage, ServerConfigError> {
    match non_blank(env, DATABASE_URL_ENV) {
        Some(database_url) => Ok(Storage::Postgres {
            database_url,
            pool_max_size: pool_max_size_from_env(env)?,
        }),
        None if mode.is_debug() => {
            warn!("DATABASE_URL not set; using in-memory user store (dev only)");
            Ok(Storage::InMemory)
        }
        None => Err(ServerConfigError::MissingEnv {
            name: DATABASE_URL_ENV,
        }),
    }
}
