use inkami_designgen::{ProviderKind, ProviderSettings};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Must exceed the
    /// provider timeout or every slow generation dies at the edge first.
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Image provider selection and credentials.
    pub provider: ProviderSettings,
    /// Rate limiting for the public submission endpoints.
    pub rate_limit: RateLimitConfig,
}

/// Fixed-window rate limit applied per client to the public POST routes.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per window (default: `10`).
    pub max_requests: u32,
    /// Window length in seconds (default: `60`).
    pub window_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                      |
    /// |-------------------------------|------------------------------|
    /// | `HOST`                        | `0.0.0.0`                    |
    /// | `PORT`                        | `3001`                       |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS`        | `120`                        |
    /// | `IMAGE_PROVIDER_KIND`         | `pollinations`               |
    /// | `IMAGE_PROVIDER_BASE_URL`     | provider default             |
    /// | `IMAGE_PROVIDER_API_KEY`      | unset (public fallback only) |
    /// | `IMAGE_PROVIDER_MODEL`        | `flux`                       |
    /// | `IMAGE_PROVIDER_TIMEOUT_SECS` | `90`                         |
    /// | `RATE_LIMIT_MAX_REQUESTS`     | `10`                         |
    /// | `RATE_LIMIT_WINDOW_SECS`      | `60`                         |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            provider: provider_settings_from_env(),
            rate_limit: rate_limit_from_env(),
        }
    }
}

/// Build [`ProviderSettings`] from `IMAGE_PROVIDER_*` variables.
fn provider_settings_from_env() -> ProviderSettings {
    let defaults = ProviderSettings::default();

    let kind = std::env::var("IMAGE_PROVIDER_KIND")
        .map(|v| ProviderKind::parse(&v).unwrap_or_else(|| panic!("Unknown IMAGE_PROVIDER_KIND: {v}")))
        .unwrap_or(defaults.kind);

    let base_url = std::env::var("IMAGE_PROVIDER_BASE_URL").unwrap_or(defaults.base_url);

    let api_key = std::env::var("IMAGE_PROVIDER_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());

    let model = std::env::var("IMAGE_PROVIDER_MODEL").unwrap_or(defaults.model);

    let timeout_secs: u64 = std::env::var("IMAGE_PROVIDER_TIMEOUT_SECS")
        .unwrap_or_else(|_| defaults.timeout_secs.to_string())
        .parse()
        .expect("IMAGE_PROVIDER_TIMEOUT_SECS must be a valid u64");

    ProviderSettings {
        kind,
        base_url,
        api_key,
        model,
        timeout_secs,
    }
}

fn rate_limit_from_env() -> RateLimitConfig {
    let max_requests: u32 = std::env::var("RATE_LIMIT_MAX_REQUESTS")
        .unwrap_or_else(|_| "10".into())
        .parse()
        .expect("RATE_LIMIT_MAX_REQUESTS must be a valid u32");

    let window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
        .unwrap_or_else(|_| "60".into())
        .parse()
        .expect("RATE_LIMIT_WINDOW_SECS must be a valid u64");

    RateLimitConfig {
        max_requests,
        window_secs,
    }
}
