// Tests for fetching the match calendar over HTTP.
use chrono::{Duration, Utc};
use matchfeed::http::HttpConfig;
use matchfeed::{fetch_feed, upcoming_matches, Config, Error, FeedQuery};
use mockito::{Matcher, Server};

fn calendar_with(start: &str, summary: &str) -> String {
    format!(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//esports-ics//EN\r\n\
         BEGIN:VEVENT\r\nDTSTART:{start}\r\nSUMMARY:{summary}\r\nEND:VEVENT\r\n\
         BEGIN:VEVENT\r\nDTSTART:not-a-date\r\nSUMMARY:Broken\r\nEND:VEVENT\r\n\
         END:VCALENDAR\r\n"
    )
}

fn config_for(server: &Server) -> Config {
    Config {
        cs2_feed_url: format!("{}/matches.ics", server.url()),
        ..Config::default()
    }
}

#[test]
fn test_upcoming_matches_sends_filters_and_filters_window() {
    let mut server = Server::new();
    let start = (Utc::now() + Duration::hours(3))
        .format("%Y%m%dT%H%M%SZ")
        .to_string();

    let mock = server
        .mock("GET", "/matches.ics")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "url".into(),
                "https://liquipedia.net/counterstrike/Liquipedia:Matches".into(),
            ),
            Matcher::UrlEncoded("teams_regex".into(), "Vitality".into()),
            Matcher::UrlEncoded("ignore_tbd".into(), "true".into()),
        ]))
        .match_header("user-agent", Matcher::Regex(r"^matchfeed/".to_string()))
        .with_status(200)
        .with_header("content-type", "text/calendar; charset=utf-8")
        .with_body(calendar_with(&start, "Vitality vs FaZe"))
        .create();

    let query = FeedQuery {
        team: Some(String::from("Vitality")),
        competition: None,
        no_tbd: true,
    };
    let matches = upcoming_matches(&config_for(&server), &query, 1).unwrap();

    mock.assert();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].summary, "Vitality vs FaZe");
}

#[test]
fn test_fetch_feed_returns_body() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/matches.ics")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n")
        .create();

    let url = FeedQuery::default()
        .to_url(&format!("{}/matches.ics", server.url()), "https://example.com")
        .unwrap();
    let client = HttpConfig::feed().build_client().unwrap();
    let body = fetch_feed(&client, &url).unwrap();

    mock.assert();
    assert_eq!(body, "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n");
}

#[test]
fn test_server_error_is_reported() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/matches.ics")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    let result = upcoming_matches(&config_for(&server), &FeedQuery::default(), 1);

    mock.assert();
    match result {
        Err(Error::Http(err)) => assert_eq!(err.status().map(|s| s.as_u16()), Some(502)),
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[test]
fn test_empty_calendar_yields_no_matches() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/matches.ics")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n")
        .create();

    let matches = upcoming_matches(&config_for(&server), &FeedQuery::default(), 7).unwrap();

    mock.assert();
    assert!(matches.is_empty());
}
