use std::{env, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
    pub environment: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let bind_port = env::var("BIND_PORT")
            .ok()
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(3000);
        let environment = env::var("APP_ENV")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "development".to_string());

        let config = Self {
            bind_addr,
            bind_port,
            environment,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One sequential test; the cases share process-wide env vars.
    #[test]
    fn parses_env_in_order() {
        env::remove_var("BIND_ADDR");
        env::remove_var("BIND_PORT");
        env::remove_var("APP_ENV");

        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.bind_port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(
            config.bind_socket().expect("valid socket").to_string(),
            "0.0.0.0:3000"
        );

        env::set_var("BIND_PORT", "not-a-port");
        let err = Config::from_env().expect_err("expected invalid port error");
        assert!(matches!(err, ConfigError::InvalidPort));

        env::set_var("BIND_ADDR", "127.0.0.1");
        env::set_var("BIND_PORT", "8080");
        env::set_var("APP_ENV", " production ");
        let config = Config::from_env().expect("config should parse");
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.environment, "production");

        env::remove_var("BIND_ADDR");
        env::remove_var("BIND_PORT");
        env::remove_var("APP_ENV");
    }
}
