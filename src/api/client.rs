use super::constants::{ACCEPT_JSON, API_BASE_PATH, USER_AGENT};
use crate::config::ServerConfig;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// Tableau Server REST API client
pub struct TableauClient {
    server_url: String,
    api_version: String,
    page_size: u32,
    http_client: reqwest::Client,
}

impl TableauClient {
    pub fn new(server_url: &str, api_version: &str, timeout: Duration) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

        let http_client = reqwest::Client::builder()
            .timeout(timeout)                         // Request timeout
            .connect_timeout(Duration::from_secs(10)) // Connection timeout
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(server_url, api_version, http_client))
    }

    /// Client for `server_url` using the API version, timeout and page size
    /// from `config`
    pub fn from_config(server_url: &str, config: &ServerConfig) -> Result<Self> {
        let mut client = Self::new(server_url, &config.api_version, config.timeout())?;
        client.page_size = config.page_size.max(1);
        Ok(client)
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(
        server_url: &str,
        api_version: &str,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
            page_size: 100,
            http_client,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Absolute URL of an API endpoint, `path` given without leading slash
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.server_url,
            API_BASE_PATH,
            self.api_version,
            path.trim_start_matches('/')
        )
    }
}
