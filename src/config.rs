use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the audit service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Port the HTTP server listens on
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// URL for the WebDriver instance used for page previews
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Endpoint of the page speed scoring API
    #[serde(default = "default_pagespeed_endpoint")]
    pub pagespeed_endpoint: String,

    /// API key for the page speed service; sourced from the config file or
    /// the `PAGESPEED_API_KEY` environment variable, never serialized back out
    #[serde(default, skip_serializing)]
    pub pagespeed_api_key: Option<String>,

    /// Maximum number of concurrent link probes
    #[serde(default = "default_max_link_concurrency")]
    pub max_link_concurrency: usize,

    /// Timeout for a single link probe, in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Timeout for page content and page speed requests, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// Default value for listen_port
fn default_listen_port() -> u16 {
    5000
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for pagespeed_endpoint
fn default_pagespeed_endpoint() -> String {
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed".to_string()
}

/// Default value for max_link_concurrency
fn default_max_link_concurrency() -> usize {
    8
}

/// Default probe timeout in seconds
fn default_probe_timeout_secs() -> u64 {
    10
}

/// Default fetch timeout in seconds
fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            webdriver_url: default_webdriver_url(),
            pagespeed_endpoint: default_pagespeed_endpoint(),
            pagespeed_api_key: None,
            max_link_concurrency: default_max_link_concurrency(),
            probe_timeout_secs: default_probe_timeout_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl AuditConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// `WEBDRIVER_URL` overrides the WebDriver address and
    /// `PAGESPEED_API_KEY` supplies the page speed credential.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(webdriver_url) = env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }

        if let Ok(api_key) = env::var("PAGESPEED_API_KEY") {
            if !api_key.is_empty() {
                self.pagespeed_api_key = Some(api_key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_conventions() {
        let config = AuditConfig::default();
        assert_eq!(config.listen_port, 5000);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert!(config.pagespeed_endpoint.starts_with("https://"));
        assert!(config.pagespeed_api_key.is_none());
        assert!(config.max_link_concurrency > 0);
    }

    #[test]
    fn partial_file_contents_fall_back_to_defaults() {
        let config: AuditConfig = serde_json::from_str(r#"{ "listen_port": 8080 }"#).unwrap();
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.webdriver_url, default_webdriver_url());
        assert_eq!(config.max_link_concurrency, default_max_link_concurrency());
    }

    #[test]
    fn api_key_is_never_serialized() {
        let config = AuditConfig {
            pagespeed_api_key: Some("secret".to_string()),
            ..AuditConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("pagespeed_api_key").is_none());
    }

    #[test]
    fn api_key_is_read_from_file_contents() {
        let config: AuditConfig =
            serde_json::from_str(r#"{ "pagespeed_api_key": "from-file" }"#).unwrap();
        assert_eq!(config.pagespeed_api_key.as_deref(), Some("from-file"));
    }
}
