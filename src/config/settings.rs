//! Application settings loaded from environment variables.
//!
//! Every required variable is checked up front and all missing names are reported in
//! a single error, so a misconfigured deployment fails before connecting anywhere.

use crate::core::access::AdminAllowlist;
use crate::errors::{Error, Result};
use std::fmt;

/// Port used by the liveness endpoint when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 10_000;

const REQUIRED: [&str; 5] = [
    "DISCORD_TOKEN",
    "DISCORD_CLIENT_ID",
    "GUILD_ID",
    "DATABASE_URL",
    "ADMIN_IDS",
];

/// Runtime configuration shared by the bot and the liveness server.
#[derive(Clone)]
pub struct AppConfig {
    /// Discord bot token
    pub discord_token: String,
    /// Discord application ID
    pub application_id: u64,
    /// Guild where the slash commands are registered
    pub guild_id: u64,
    /// Database URL, including credentials
    pub database_url: String,
    /// Users allowed to run admin commands
    pub admins: AdminAllowlist,
    /// Role removed by `/clearbuyers`
    pub buyer_role_id: Option<u64>,
    /// Liveness endpoint port
    pub port: u16,
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .filter(|&name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Config {
                message: format!("Missing environment variables: {}", missing.join(", ")),
            });
        }

        let required = |name: &str| {
            get(name).ok_or_else(|| Error::Config {
                message: format!("Missing environment variable: {name}"),
            })
        };

        let admins = AdminAllowlist::parse(&required("ADMIN_IDS")?)?;
        if admins.is_empty() {
            return Err(Error::Config {
                message: "ADMIN_IDS contains no user IDs".to_string(),
            });
        }

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| Error::Config {
                message: format!("PORT is not a valid port number: `{raw}`"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            application_id: parse_id("DISCORD_CLIENT_ID", &required("DISCORD_CLIENT_ID")?)?,
            guild_id: parse_id("GUILD_ID", &required("GUILD_ID")?)?,
            database_url: required("DATABASE_URL")?,
            admins,
            buyer_role_id: get("BUYER_ROLE_ID")
                .map(|raw| parse_id("BUYER_ROLE_ID", &raw))
                .transpose()?,
            port,
        })
    }
}

fn parse_id(name: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|_| Error::Config {
        message: format!("{name} is not a valid Discord ID: `{raw}`"),
    })
}

// Keeps the token and database credentials out of logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("discord_token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .field("database_url", &"<redacted>")
            .field("admins", &self.admins.len())
            .field("buyer_role_id", &self.buyer_role_id)
            .field("port", &self.port)
            .finish()
    }
}
