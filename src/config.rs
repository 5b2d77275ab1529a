//! Environment-driven configuration.
//!
//! | Variable         | Default                                                  |
//! |------------------|----------------------------------------------------------|
//! | `CS2_FEED_URL`   | `https://ics.snwfdhmp.com/matches.ics`                   |
//! | `CS2_SOURCE_URL` | `https://liquipedia.net/counterstrike/Liquipedia:Matches` |
//! | `GIPHY_API_URL`  | `https://api.giphy.com`                                  |
//! | `GIPHY_API_KEY`  | none                                                     |

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::ffi::OsString;

pub const DEFAULT_FEED_URL: &str = "https://ics.snwfdhmp.com/matches.ics";
pub const DEFAULT_SOURCE_URL: &str = "https://liquipedia.net/counterstrike/Liquipedia:Matches";
pub const DEFAULT_GIPHY_API_URL: &str = "https://api.giphy.com";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// ICS proxy that turns a schedule page into a calendar feed
    #[serde(default = "default_feed_url")]
    pub cs2_feed_url: String,

    /// Schedule page handed to the proxy
    #[serde(default = "default_source_url")]
    pub cs2_source_url: String,

    #[serde(default = "default_giphy_api_url")]
    pub giphy_api_url: String,

    #[serde(default)]
    pub giphy_api_key: Option<String>,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_giphy_api_url() -> String {
    DEFAULT_GIPHY_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cs2_feed_url: default_feed_url(),
            cs2_source_url: default_source_url(),
            giphy_api_url: default_giphy_api_url(),
            giphy_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(utf8_vars(env::vars_os()))
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// The Giphy key, treating an empty value as unset.
    pub fn giphy_api_key(&self) -> Result<&str> {
        match self.giphy_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::MissingApiKey),
        }
    }
}

/// Skips variables whose name or value is not valid UTF-8 instead of
/// panicking like `std::env::vars` does.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                log::debug!("ignoring non UTF-8 environment variable {}", key);
                None
            }
        })
}
