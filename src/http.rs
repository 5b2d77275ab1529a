//! Blocking HTTP client configuration.

use crate::error::Result;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Total request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    /// Settings for fetching the match calendar feed
    pub fn feed() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            ..Self::default()
        }
    }

    /// Settings for Giphy API calls
    pub fn giphy() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            ..Self::default()
        }
    }

    pub fn build_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?)
    }
}
