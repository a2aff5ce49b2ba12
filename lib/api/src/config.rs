use actix_web::http::{header::HeaderValue, Uri};
use ddix_core::{Error, Result};
use tracing::warn;

/// Origins always allowed to call the API from a browser.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Extra CORS origins on top of [`DEFAULT_ALLOWED_ORIGINS`]; `*` allows any
    pub allowed_origins: Vec<String>,
}

/// Resolved CORS origin policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: Vec::new(),
        }
    }
}

/// Check that `origin` is usable as an exact-match CORS origin.
pub fn validate_origin(origin: &str) -> Result<()> {
    let uri: Uri = origin
        .parse()
        .map_err(|e| Error::InvalidConfig(format!("origin {:?}: {}", origin, e)))?;
    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(Error::InvalidConfig(format!(
            "origin {:?}: expected scheme://host[:port]",
            origin
        )));
    }
    HeaderValue::from_str(origin)
        .map_err(|e| Error::InvalidConfig(format!("origin {:?}: {}", origin, e)))?;
    Ok(())
}

impl ApiConfig {
    /// Default origins followed by the configured ones. Blanks and repeats are
    /// dropped, invalid origins are dropped with a warning, `*` allows any origin.
    #[must_use]
    pub fn origins(&self) -> AllowedOrigins {
        let mut origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect();
        for origin in &self.allowed_origins {
            let origin = origin.trim();
            if origin == "*" {
                return AllowedOrigins::Any;
            }
            if origin.is_empty() || origins.iter().any(|o| o == origin) {
                continue;
            }
            match validate_origin(origin) {
                Ok(()) => origins.push(origin.to_string()),
                Err(e) => warn!("Ignoring CORS origin: {}", e),
            }
        }
        AllowedOrigins::List(origins)
    }
}
