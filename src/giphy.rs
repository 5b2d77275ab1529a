//! Giphy GIF search.

use crate::config::Config;
use crate::error::Result;
use crate::http::HttpConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::io::Write;
use url::Url;

pub const DEFAULT_LIMIT: u32 = 3;
const RATING: &str = "pg-13";
const LANG: &str = "en";

/// One search hit as printed by `gif-search`.
///
/// A missing or null `title` becomes an empty `description`, and an empty
/// GIF or MP4 URL is reported as `null` rather than `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GifResult {
    pub description: String,
    pub gif_url: Option<String>,
    pub mp4_url: Option<String>,
    pub preview_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<GifObject>>,
}

#[derive(Debug, Default, Deserialize)]
struct GifObject {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    images: Option<Images>,
}

#[derive(Debug, Default, Deserialize)]
struct Images {
    #[serde(default)]
    original: Option<Rendition>,
    #[serde(default)]
    fixed_width_small: Option<Rendition>,
}

#[derive(Debug, Default, Deserialize)]
struct Rendition {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    mp4: Option<String>,
}

impl From<GifObject> for GifResult {
    fn from(item: GifObject) -> Self {
        let images = item.images.unwrap_or_default();
        let original = images.original.unwrap_or_default();
        let fixed_width_small = images.fixed_width_small.unwrap_or_default();
        GifResult {
            description: item.title.unwrap_or_default(),
            gif_url: original.url.filter(|u| !u.is_empty()),
            mp4_url: original.mp4.filter(|u| !u.is_empty()),
            preview_url: fixed_width_small.url.unwrap_or_default(),
        }
    }
}

/// Turns a raw search response body into results, dropping items that have
/// neither a GIF nor an MP4 URL.
pub fn parse_search_response(body: &str) -> Result<Vec<GifResult>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(GifResult::from)
        .filter(|r| r.gif_url.is_some() || r.mp4_url.is_some())
        .collect())
}

/// Prints results as a pretty JSON array, `[]` when there are none.
pub fn render<W: Write>(out: &mut W, results: &[GifResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GiphyClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpConfig::giphy().build_client()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Client for the configured endpoint. Fails with
    /// [`Error::MissingApiKey`](crate::Error::MissingApiKey) before any
    /// network use when no key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.giphy_api_key()?;
        Self::new(config.giphy_api_url.as_str(), api_key)
    }

    pub fn search_url(&self, query: &str, limit: u32) -> Result<Url> {
        let endpoint = format!("{}/v1/gifs/search", self.base_url.trim_end_matches('/'));
        let limit = limit.to_string();
        Ok(Url::parse_with_params(
            &endpoint,
            &[
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("limit", limit.as_str()),
                ("rating", RATING),
                ("lang", LANG),
            ],
        )?)
    }

    pub fn search(&self, query: &str, limit: u32) -> Result<Vec<GifResult>> {
        let url = self.search_url(query, limit)?;
        log::debug!("searching giphy for {:?} (limit {})", query, limit);
        // The URL carries the API key; keep it out of error messages.
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|err| err.without_url())?;
        let results = parse_search_response(&body)?;
        log::debug!("giphy returned {} usable result(s)", results.len());
        Ok(results)
    }
}
