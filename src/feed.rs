//! Fetching the CS2 match calendar from the ICS proxy.
//!
//! Team, competition and TBD filtering happen on the proxy side; this module
//! only encodes them as query parameters.

use crate::config::Config;
use crate::error::Result;
use crate::http::HttpConfig;
use crate::matches::{filter_matches, Match};
use reqwest::blocking::Client;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Regex matched against team names
    pub team: Option<String>,
    /// Regex matched against competition names
    pub competition: Option<String>,
    /// Leave out matches whose teams are not announced yet
    pub no_tbd: bool,
}

impl FeedQuery {
    /// Builds the proxy URL for `feed_url`, asking it to render `source_url`.
    pub fn to_url(&self, feed_url: &str, source_url: &str) -> Result<Url> {
        let mut params: Vec<(&str, &str)> = vec![("url", source_url)];
        if let Some(team) = non_empty(&self.team) {
            params.push(("teams_regex", team));
        }
        if let Some(competition) = non_empty(&self.competition) {
            params.push(("competition_regex", competition));
        }
        if self.no_tbd {
            params.push(("ignore_tbd", "true"));
        }
        Ok(Url::parse_with_params(feed_url, &params)?)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Downloads the raw ICS text. Any non-2xx status is an error.
pub fn fetch_feed(client: &Client, url: &Url) -> Result<String> {
    log::debug!("fetching match feed from {}", url);
    let body = client
        .get(url.clone())
        .send()?
        .error_for_status()?
        .text()?;
    log::debug!("received {} bytes of calendar data", body.len());
    Ok(body)
}

/// Fetches the feed described by `config` and `query` and keeps the matches
/// starting within the next `days` days.
pub fn upcoming_matches(config: &Config, query: &FeedQuery, days: u64) -> Result<Vec<Match>> {
    let url = query.to_url(&config.cs2_feed_url, &config.cs2_source_url)?;
    let client = HttpConfig::feed().build_client()?;
    let raw = fetch_feed(&client, &url)?;
    let matches = filter_matches(&raw, days);
    log::info!("{} match(es) in the next {} day(s)", matches.len(), days);
    Ok(matches)
}
