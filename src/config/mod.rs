use std::env;
use std::net::SocketAddr;

use chrono_tz::Tz;
use thiserror::Error;

use crate::models::PrivilegeTable;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Everything the server needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` runs against the in-process store.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub webhook_secret: String,
    /// Base URL for outbound messages, bot token included.
    pub bot_api_url: String,
    pub privileges: PrivilegeTable,
    pub timezone: Tz,
    pub production: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let bot_token =
            var("TELEGRAM_BOT_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;
        let api_base =
            var("TELEGRAM_API_BASE").unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string());

        let timezone = match var("BOT_TIMEZONE") {
            Some(name) => name.parse::<Tz>().map_err(|_| ConfigError::Invalid {
                name: "BOT_TIMEZONE",
                value: name.clone(),
            })?,
            None => DEFAULT_TIMEZONE,
        };

        let admin_id = match var("ADMIN_CHAT_ID") {
            Some(raw) => Some(parse_chat_id("ADMIN_CHAT_ID", &raw)?),
            None => None,
        };

        Ok(Self {
            database_url: var("DATABASE_URL"),
            bind_addr,
            webhook_secret: var("WEBHOOK_SECRET").ok_or(ConfigError::Missing("WEBHOOK_SECRET"))?,
            bot_api_url: format!("{}/bot{}", api_base.trim_end_matches('/'), bot_token),
            privileges: PrivilegeTable {
                admin_id,
                admins: parse_chat_ids("ADMIN_CHAT_IDS", var("ADMIN_CHAT_IDS"))?,
                core: parse_chat_ids("CORE_CHAT_IDS", var("CORE_CHAT_IDS"))?,
                members: parse_chat_ids("MEMBER_CHAT_IDS", var("MEMBER_CHAT_IDS"))?,
            },
            timezone,
            production: var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_list(&raw).map(str::to_string).collect())
                .unwrap_or_default(),
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_chat_id(name: &'static str, raw: &str) -> Result<i64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}

fn parse_chat_ids(name: &'static str, raw: Option<String>) -> Result<Vec<i64>, ConfigError> {
    match raw {
        Some(raw) => split_list(&raw).map(|id| parse_chat_id(name, id)).collect(),
        None => Ok(Vec::new()),
    }
}
