use super::ProxyError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Proxy configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Bearer token for the catalog API.
    pub api_key: String,
    /// Catalog API root, without trailing slash.
    pub base_url: String,
    /// Listen address.
    pub addr: String,
}

impl ProxyConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// | Env Var         | Default                        |
    /// |-----------------|--------------------------------|
    /// | `TMDB_API_KEY`  | required                       |
    /// | `TMDB_BASE_URL` | `https://api.themoviedb.org/3` |
    /// | `PROXY_ADDR`    | `0.0.0.0:3000`                 |
    pub fn from_env() -> Result<Self, ProxyError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProxyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TMDB_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ProxyError::Config("TMDB_API_KEY is not set".into()))?;

        let base_url = lookup("TMDB_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let addr = lookup("PROXY_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.into());

        Ok(Self {
            api_key,
            base_url,
            addr,
        })
    }
}
