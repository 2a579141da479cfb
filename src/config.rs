// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Store credentials are injected through the process environment (or a
//! local `.env` file) and assembled into a MongoDB connection string once
//! at startup.

use std::env;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_HOST: &str = "cluster0.qiaxbve.mongodb.net";
const DEFAULT_DB_APP_NAME: &str = "Cluster0";
const DEFAULT_DB_NAME: &str = "IfterSpotDB";

/// Which document store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// MongoDB via the official driver.
    Mongo,
    /// In-process store; data is lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreKind::Mongo),
            "memory" => Ok(StoreKind::Memory),
            other => Err(ConfigError::Invalid {
                name: "STORE",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Backing store
    pub store: StoreKind,
    /// Database holding the listing, review and comment collections
    pub db_name: String,
    /// MongoDB connection string (empty for the memory store)
    pub mongodb_uri: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `MONGODB_URI` takes precedence over the `DB_USER`/`DB_PASS`/`DB_HOST`
    /// triple. Credentials are not required when `STORE=memory`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store = match env::var("STORE") {
            Ok(value) => value.parse()?,
            Err(_) => StoreKind::Mongo,
        };

        let mongodb_uri = match (store, env::var("MONGODB_URI")) {
            (_, Ok(uri)) => uri.trim().to_string(),
            (StoreKind::Memory, Err(_)) => String::new(),
            (StoreKind::Mongo, Err(_)) => {
                let user = env::var("DB_USER").map_err(|_| ConfigError::Missing("DB_USER"))?;
                let pass = env::var("DB_PASS").map_err(|_| ConfigError::Missing("DB_PASS"))?;
                let host = env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string());
                let app_name =
                    env::var("DB_APP_NAME").unwrap_or_else(|_| DEFAULT_DB_APP_NAME.to_string());
                build_srv_uri(user.trim(), pass.trim(), &host, &app_name)
            }
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            store,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            mongodb_uri,
        })
    }
}

/// Assemble a `mongodb+srv` connection string with percent-encoded credentials.
pub fn build_srv_uri(user: &str, pass: &str, host: &str, app_name: &str) -> String {
    format!(
        "mongodb+srv://{}:{}@{}/?appName={}",
        urlencoding::encode(user),
        urlencoding::encode(pass),
        host,
        urlencoding::encode(app_name)
    )
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
