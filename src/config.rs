use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one Plex server, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::Missing("PLEX_BASEURL"));
        }

        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::Missing("PLEX_TOKEN"));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            token,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `PLEX_BASEURL`, `PLEX_TOKEN` and `PLEX_TIMEOUT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source.
    ///
    /// `PLEX_BASEURL` wins; without it the URL is assembled from
    /// `PLEX_SERVER_IP` and `PLEX_SERVER_PORT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = match var("PLEX_BASEURL") {
            Some(url) => url,
            None => match (var("PLEX_SERVER_IP"), var("PLEX_SERVER_PORT")) {
                (Some(ip), Some(port)) => server_url(&ip, &port)?,
                _ => return Err(ConfigError::Missing("PLEX_BASEURL")),
            },
        };
        let token = var("PLEX_TOKEN").ok_or(ConfigError::Missing("PLEX_TOKEN"))?;

        let mut config = Self::new(base_url, token)?;
        if let Some(raw) = var("PLEX_TIMEOUT") {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "PLEX_TIMEOUT",
                value: raw.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

/// `http://{ip}:{port}`, dropping any scheme the caller put on the address.
pub fn server_url(server_ip: &str, server_port: &str) -> Result<String, ConfigError> {
    let ip = server_ip.trim();
    let ip = ip
        .strip_prefix("http://")
        .or_else(|| ip.strip_prefix("https://"))
        .unwrap_or(ip)
        .trim_end_matches('/');
    if ip.is_empty() {
        return Err(ConfigError::Missing("PLEX_SERVER_IP"));
    }

    let port = server_port.trim();
    if port.is_empty() {
        return Err(ConfigError::Missing("PLEX_SERVER_PORT"));
    }
    if port.parse::<u16>().is_err() {
        return Err(ConfigError::Invalid {
            name: "PLEX_SERVER_PORT",
            value: port.to_string(),
        });
    }

    Ok(format!("http://{}:{}", ip, port))
}
