use std::env;
use std::time::Duration;

use crate::error::{ConfigError, Result};

pub const TOKEN_ENV_VAR: &str = "DISCORD_TOKEN";
pub const DEFAULT_PREFIX: &str = "!";
// How long the warnings about rejected reactions stay in the channel.
pub const WARNING_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub prefix: String,
    pub warning_lifetime: Duration,
}

impl Config {
    pub fn new(token: &str) -> Self {
        Config {
            token: token.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            warning_lifetime: WARNING_LIFETIME,
        }
    }

    // The bot token is the only setting taken from the environment.
    pub fn from_env() -> Result<Self> {
        Config::from_token(env::var(TOKEN_ENV_VAR).ok())
    }

    fn from_token(token: Option<String>) -> Result<Self> {
        match token {
            Some(token) if !token.trim().is_empty() => Ok(Config::new(token.trim())),
            _ => Err(ConfigError::MissingEnvVar(TOKEN_ENV_VAR.to_string()).into()),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("warning_lifetime", &self.warning_lifetime)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, DEFAULT_PREFIX, TOKEN_ENV_VAR, WARNING_LIFETIME};
    use crate::error::{ConfigError, Error};

    #[test]
    fn test_new_config_uses_defaults() {
        let config = Config::new("secret");

        assert_eq!(config.token, "secret");
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.warning_lifetime, WARNING_LIFETIME);
    }

    #[test]
    fn test_token_is_trimmed() {
        let config = Config::from_token(Some("  secret\n".to_string())).unwrap();

        assert_eq!(config.token, "secret");
    }

    #[test]
    fn test_get_error_for_missing_token() {
        let expected = Error::Config(ConfigError::MissingEnvVar(TOKEN_ENV_VAR.to_string()));

        assert_eq!(Config::from_token(None).unwrap_err(), expected);
        assert_eq!(Config::from_token(Some("".to_string())).unwrap_err(), expected);
        assert_eq!(Config::from_token(Some(" \t ".to_string())).unwrap_err(), expected);
        assert_eq!(
            expected.to_string(),
            "Missing required environment variable: DISCORD_TOKEN"
        );
    }

    #[test]
    fn test_debug_output_hides_token() {
        let config = Config::new("secret");

        assert_eq!(format!("{:?}", config).contains("secret"), false);
    }
}
