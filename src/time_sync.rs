// Network time fetch
//
// Asks a public time service for the current time so a game can compare it
// against the local clock (offline progress, daily rewards). One blocking
// GET per attempt with a fixed attempt budget; no backoff, no caching.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::TimeSyncConfig;

/// Errors from fetching or parsing the remote time
#[derive(Debug, Error)]
pub enum TimeSyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no time attribute in response")]
    MissingTimestamp,

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("time service returned {status} on all {attempts} attempts")]
    Exhausted { attempts: u32, status: StatusCode },
}

fn time_attr() -> &'static Regex {
    static TIME_ATTR: OnceLock<Regex> = OnceLock::new();
    TIME_ATTR.get_or_init(|| Regex::new(r#"\btime="([^"]*)""#).expect("time pattern is valid"))
}

/// Extract `time="<microseconds since epoch>"` from a response body
///
/// ```
/// use gamekit::time_sync::parse_timestamp;
///
/// let body = r#"<timestamp time="1395772696469995" delay="1395772696469995"/>"#;
/// let time = parse_timestamp(body).unwrap();
/// assert_eq!(time.to_rfc3339(), "2014-03-25T18:38:16.469+00:00");
/// ```
pub fn parse_timestamp(body: &str) -> Result<DateTime<Utc>, TimeSyncError> {
    let raw = time_attr()
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(TimeSyncError::MissingTimestamp)?;

    let micros: i64 = raw
        .trim()
        .parse()
        .map_err(|_| TimeSyncError::InvalidTimestamp(raw.to_string()))?;

    // Millisecond precision is all a game clock needs
    DateTime::from_timestamp_millis(micros / 1000)
        .ok_or_else(|| TimeSyncError::InvalidTimestamp(raw.to_string()))
}

/// Blocking client for the time service
pub struct TimeClient {
    client: reqwest::blocking::Client,
    config: TimeSyncConfig,
}

impl TimeClient {
    pub fn new(mut config: TimeSyncConfig) -> Result<Self, TimeSyncError> {
        // Zero attempts would never send a request
        config.attempts = config.attempts.max(1);

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        tracing::debug!(
            "Initialized time client: {} ({} attempts, {}s timeout)",
            config.url,
            config.attempts,
            config.timeout_secs
        );

        Ok(Self { client, config })
    }

    /// Fetch the current time.
    ///
    /// Non-200 responses are logged and retried until the attempt budget is
    /// spent. A transport error or an unparseable 200 body ends the fetch
    /// immediately.
    pub fn fetch(&self) -> Result<DateTime<Utc>, TimeSyncError> {
        let mut last_status = StatusCode::OK;

        for attempt in 1..=self.config.attempts {
            let response = self
                .client
                .get(&self.config.url)
                .header(ACCEPT, "text/html, application/xhtml+xml, */*")
                .header(CACHE_CONTROL, "no-cache, no-store")
                .header(PRAGMA, "no-cache")
                .send()?;

            let status = response.status();
            if status == StatusCode::OK {
                let body = response.text()?;
                let time = parse_timestamp(&body)?;
                tracing::debug!(attempt, %time, "fetched network time");
                return Ok(time);
            }

            tracing::error!(
                "Couldn't get date/time (attempt {}/{}): {}",
                attempt,
                self.config.attempts,
                status
            );
            last_status = status;
        }

        Err(TimeSyncError::Exhausted {
            attempts: self.config.attempts,
            status: last_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    const SAMPLE_BODY: &str = r#"<timestamp time="1395772696469995" delay="0"/>"#;

    /// Serve one canned response per connection on a loopback port.
    /// Joining the handle yields the number of requests answered.
    fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<usize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/actualtime.cgi", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut served = 0;
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();

                // Drain the request head
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap() > 0 {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }

                let reason = if status == 200 { "OK" } else { "Service Unavailable" };
                write!(
                    stream,
                    "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                )
                .unwrap();
                served += 1;
            }
            served
        });

        (url, handle)
    }

    fn client_for(url: String, attempts: u32) -> TimeClient {
        TimeClient::new(TimeSyncConfig {
            url,
            attempts,
            timeout_secs: 5,
            ..TimeSyncConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_sample_response() {
        let body = r#"<timestamp time="1395772696469995" delay="1395772696469995"/>"#;
        let time = parse_timestamp(body).unwrap();

        assert_eq!(time.year(), 2014);
        assert_eq!(time.month(), 3);
        assert_eq!(time.day(), 25);
        assert_eq!(time.hour(), 18);
        assert_eq!(time.minute(), 38);
        assert_eq!(time.second(), 16);
        assert_eq!(time.timestamp_subsec_millis(), 469);
    }

    #[test]
    fn test_parse_epoch() {
        let time = parse_timestamp(r#"<timestamp time="0"/>"#).unwrap();
        assert_eq!(time.timestamp(), 0);
    }

    #[test]
    fn test_parse_ignores_delay_attribute() {
        let body = r#"<timestamp delay="5" time="2000000"/>"#;
        assert_eq!(parse_timestamp(body).unwrap().timestamp(), 2);
    }

    #[test]
    fn test_parse_missing_attribute() {
        let err = parse_timestamp("<html><body>maintenance</body></html>").unwrap_err();
        assert!(matches!(err, TimeSyncError::MissingTimestamp));
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = parse_timestamp(r#"<timestamp time="soon"/>"#).unwrap_err();
        assert!(matches!(err, TimeSyncError::InvalidTimestamp(ref s) if s == "soon"));
    }

    #[test]
    fn test_parse_empty_value() {
        let err = parse_timestamp(r#"<timestamp time=""/>"#).unwrap_err();
        assert!(matches!(err, TimeSyncError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_fetch_retries_until_ok() {
        let (url, server) = serve(vec![(503, ""), (503, ""), (200, SAMPLE_BODY)]);

        let time = client_for(url, 3).fetch().unwrap();

        assert_eq!(time.to_rfc3339(), "2014-03-25T18:38:16.469+00:00");
        assert_eq!(server.join().unwrap(), 3);
    }

    #[test]
    fn test_fetch_exhausts_attempts() {
        let (url, server) = serve(vec![(503, ""), (503, ""), (503, "")]);

        let err = client_for(url, 3).fetch().unwrap_err();

        assert!(
            matches!(
                err,
                TimeSyncError::Exhausted { attempts: 3, status }
                    if status == StatusCode::SERVICE_UNAVAILABLE
            ),
            "got {err:?}"
        );
        assert_eq!(server.join().unwrap(), 3);
    }

    #[test]
    fn test_fetch_stops_on_unparseable_ok_body() {
        let (url, server) = serve(vec![(200, "<html>down for maintenance</html>")]);

        let err = client_for(url, 3).fetch().unwrap_err();

        assert!(matches!(err, TimeSyncError::MissingTimestamp), "got {err:?}");
        assert_eq!(server.join().unwrap(), 1);
    }

    #[test]
    fn test_zero_attempts_still_sends_one_request() {
        let (url, server) = serve(vec![(503, "")]);

        let err = client_for(url, 0).fetch().unwrap_err();

        assert!(
            matches!(err, TimeSyncError::Exhausted { attempts: 1, .. }),
            "got {err:?}"
        );
        assert_eq!(server.join().unwrap(), 1);
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(TimeClient::new(TimeSyncConfig::default()).is_ok());
    }
}
