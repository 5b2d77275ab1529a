use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use std::fmt;
use std::io::{self, Write};

const EVENT_MARKER: &str = "BEGIN:VEVENT";
const SUMMARY_KEY: &str = "SUMMARY:";
const START_KEY: &str = "DTSTART:";
const START_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// How far back, in hours, a match may have started and still be listed.
pub const GRACE_PERIOD_HOURS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: DateTime<Utc>,
    pub summary: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            self.start.format("%a %d %b %H:%M UTC"),
            self.summary
        )
    }
}

/// Matches from `raw_feed` starting between two hours ago and `days` days
/// from now, earliest first.
pub fn filter_matches(raw_feed: &str, days: u64) -> Vec<Match> {
    filter_matches_at(raw_feed, days, Utc::now())
}

/// Same as [`filter_matches`] with an explicit reference instant.
pub fn filter_matches_at(raw_feed: &str, days: u64, now: DateTime<Utc>) -> Vec<Match> {
    let lower = now
        .checked_sub_signed(TimeDelta::hours(GRACE_PERIOD_HOURS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let upper = i64::try_from(days)
        .ok()
        .and_then(TimeDelta::try_days)
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let mut matches: Vec<Match> = parse_records(raw_feed)
        .into_iter()
        .filter(|m| lower <= m.start && m.start <= upper)
        .collect();
    // Stable, so equal start times keep feed order.
    matches.sort_by(|a, b| a.start.cmp(&b.start));
    matches
}

/// Every record of the feed whose start time parses, in feed order.
fn parse_records(raw_feed: &str) -> Vec<Match> {
    raw_feed
        .split(EVENT_MARKER)
        .skip(1)
        .filter_map(|record| {
            let mut summary = "";
            let mut start = "";
            for line in record.lines() {
                if let Some(value) = line.strip_prefix(SUMMARY_KEY) {
                    summary = value;
                } else if let Some(value) = line.strip_prefix(START_KEY) {
                    start = value;
                }
            }

            match parse_start(start) {
                Some(start) => Some(Match {
                    start,
                    summary: summary.to_string(),
                }),
                None => {
                    log::debug!("skipping event {:?} with start time {:?}", summary, start);
                    None
                }
            }
        })
        .collect()
}

fn parse_start(value: &str) -> Option<DateTime<Utc>> {
    if !has_start_shape(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, START_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `YYYYMMDDTHHMMSSZ` exactly. chrono alone skips spaces between fields and
/// takes `60` as a leap second.
fn has_start_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 16
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[8] == b'T'
        && bytes[9..15].iter().all(u8::is_ascii_digit)
        && bytes[15] == b'Z'
        && &bytes[13..15] != b"60"
}

/// Writes one line per match, or a single line saying there were none.
pub fn render<W: Write>(out: &mut W, matches: &[Match], days: u64) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(out, "No upcoming CS2 matches in the next {} day(s).", days)?;
    }
    for m in matches {
        writeln!(out, "{}", m)?;
    }
    Ok(())
}
