//! HTTP cache control module
//!
//! `Last-Modified` generation and `If-Modified-Since` handling.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Parse an HTTP date header value
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Check the client's `If-Modified-Since` against the file's modification time
///
/// # Returns
/// Returns true if the file has not changed since that date (should return 304).
/// Unparseable dates never match.
pub fn is_not_modified(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    // HTTP dates have one-second resolution
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const RFC_EXAMPLE_DATE: &str = "Sun, 06 Nov 1994 08:49:37 GMT";

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(at(784_111_777)), RFC_EXAMPLE_DATE);
    }

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date(RFC_EXAMPLE_DATE).unwrap();
        assert_eq!(parsed.timestamp(), 784_111_777);
        assert!(parse_http_date("yesterday").is_none());
    }

    #[test]
    fn test_is_not_modified() {
        let header = Some(RFC_EXAMPLE_DATE);
        assert!(is_not_modified(header, at(784_111_777)));
        assert!(is_not_modified(header, at(784_111_000)));
        assert!(!is_not_modified(header, at(784_111_778)));
        assert!(!is_not_modified(Some("garbage"), at(0)));
        assert!(!is_not_modified(None, at(0)));
    }

    #[test]
    fn test_sub_second_mtime_is_truncated() {
        let modified = at(784_111_777) + Duration::from_millis(750);
        assert!(is_not_modified(Some(RFC_EXAMPLE_DATE), modified));
    }
}
