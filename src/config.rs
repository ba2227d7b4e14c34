//! Application configuration loaded from environment variables.
//!
//! Everything needed to talk to LinkedIn and to build our own callback URL
//! is validated once at startup; request handlers never re-check it.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// LinkedIn OAuth client ID (public)
    pub linkedin_client_id: String,
    /// LinkedIn OAuth client secret
    pub linkedin_client_secret: String,
    /// This service's own public base URL. The OAuth callback is
    /// `{api_base_url}/auth/linkedin/callback`, and LinkedIn checks it for
    /// exact equality during the code exchange.
    pub api_base_url: String,
    /// Frontend URL the OAuth callback redirects back to.
    pub frontend_url: String,
    /// OAuth scope requested during authorization.
    pub linkedin_scope: String,
    /// LinkedIn-Version header value; also selects the post mapper.
    pub linkedin_version: String,
    /// Store connection string (sqlite).
    pub database_url: String,
    /// Upper bound on pooled store connections.
    pub database_max_connections: u32,
    /// How long a request waits for a pooled connection before failing.
    pub database_acquire_timeout_secs: u64,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            linkedin_client_id: "test_client_id".to_string(),
            linkedin_client_secret: "test_secret".to_string(),
            api_base_url: "http://localhost:8080".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            linkedin_scope: "openid profile email w_member_social".to_string(),
            linkedin_version: "202411".to_string(),
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 5,
            database_acquire_timeout_secs: 30,
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing client credentials, public base URL, or frontend URL are
    /// fatal: without them the OAuth flow would construct malformed
    /// callbacks or redirect users nowhere.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            linkedin_client_id: env::var("LINKEDIN_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("LINKEDIN_CLIENT_ID"))?,
            linkedin_client_secret: env::var("LINKEDIN_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("LINKEDIN_CLIENT_SECRET"))?,
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("API_BASE_URL"))?,
            frontend_url: env::var("FRONTEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("FRONTEND_URL"))?,
            linkedin_scope: env::var("LINKEDIN_SCOPE")
                .unwrap_or_else(|_| "openid profile email w_member_social".to_string()),
            linkedin_version: env::var("LINKEDIN_VERSION")
                .unwrap_or_else(|_| "202411".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:linkboard.db".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            database_acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("LINKEDIN_CLIENT_ID", "test_id");
        env::set_var("LINKEDIN_CLIENT_SECRET", "test_secret");
        env::set_var("API_BASE_URL", "https://api.example.com/");
        env::set_var("FRONTEND_URL", "https://dash.example.com");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.linkedin_client_id, "test_id");
        assert_eq!(config.linkedin_client_secret, "test_secret");
        // Trailing slash is stripped so callback URLs join cleanly
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.linkedin_version, "202411");
        assert_eq!(config.port, 8080);

        // Missing public base URL is startup-fatal, not defaulted
        env::remove_var("API_BASE_URL");
        match Config::from_env() {
            Err(ConfigError::Missing(var)) => assert_eq!(var, "API_BASE_URL"),
            other => panic!("expected Missing(API_BASE_URL), got {:?}", other),
        }
        env::set_var("API_BASE_URL", "https://api.example.com");
    }
}
