//! Server configuration from environment variables.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Secret used to sign and verify session tokens.
    pub jwt_secret: String,
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated, or "*" for all without credentials).
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: Token signing secret. There is deliberately no
    ///   built-in fallback; startup fails without it.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 5000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins
    ///   (default: "http://localhost:5173")
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            jwt_secret,
            port,
            log_level,
            cors_allowed_origins,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_secret_required_then_defaults_applied() {
        // Single test so no parallel test races on these variables.
        // SAFETY: No other test in this binary reads or writes JWT_SECRET.
        unsafe { env::remove_var("JWT_SECRET") };
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::MissingEnvVar(name)) if name == "JWT_SECRET"
        ));

        // SAFETY: See above.
        unsafe { env::set_var("JWT_SECRET", "test-secret") };
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.jwt_secret, "test-secret");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "http://localhost:5173");
        // SAFETY: See above.
        unsafe { env::remove_var("JWT_SECRET") };
    }
}
