//! Environment configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Token, liveness port, dev guild and log level from the environment

use anyhow::{anyhow, Context as _, Result};
use serenity::model::id::GuildId;

/// Port the liveness endpoint binds when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Log filter used when neither `LOG_LEVEL` nor `RUST_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub port: u16,
    /// Register commands for this guild only (instant propagation during development)
    pub discord_guild_id: Option<GuildId>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment variables
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .or_else(|| lookup("TOKEN"))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN (or TOKEN) must be set"))?;

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let discord_guild_id = match lookup("DISCORD_GUILD_ID").filter(|g| !g.trim().is_empty()) {
            Some(raw) => Some(GuildId(raw.trim().parse::<u64>().with_context(|| {
                format!("DISCORD_GUILD_ID must be a numeric id, got '{raw}'")
            })?)),
            None => None,
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            discord_token,
            port,
            discord_guild_id,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_token_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap();
        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.discord_guild_id, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_token_fallback_name() {
        let config = Config::from_lookup(lookup_from(&[("TOKEN", "legacy")])).unwrap();
        assert_eq!(config.discord_token, "legacy");
    }

    #[test]
    fn test_discord_token_wins_over_fallback() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN", "legacy"),
            ("DISCORD_TOKEN", "primary"),
        ]))
        .unwrap();
        assert_eq!(config.discord_token, "primary");
    }

    #[test]
    fn test_port_and_guild_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("PORT", "8080"),
            ("DISCORD_GUILD_ID", "123456789"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.discord_guild_id, Some(GuildId(123456789)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());

        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc"), ("PORT", "70000")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_guild_id_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_GUILD_ID", "general"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_log_level_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("LOG_LEVEL", "   "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
