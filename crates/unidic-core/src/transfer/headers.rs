//! Parse HTTP response header lines into a ResponseHead.

/// Parsed `Content-Range` value (`bytes 100-999/1000`, `bytes */1000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    /// First byte served, `None` for the unsatisfied form `*/total`.
    pub start: Option<u64>,
    /// Last byte served (inclusive).
    pub end: Option<u64>,
    /// Complete length of the resource, `None` when the server sent `*`.
    pub total: Option<u64>,
}

/// Key headers of the final response (after redirects).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// Status code from the last `HTTP/x` status line.
    pub status: Option<u32>,
    /// `Content-Length`: size of this response body, not of the whole resource.
    pub content_length: Option<u64>,
    pub content_range: Option<ContentRange>,
    /// True if the server sent `Accept-Ranges: bytes`.
    pub accept_ranges: bool,
}

impl ResponseHead {
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}

/// Parse collected header lines into a ResponseHead.
///
/// A new status line resets everything collected so far, so headers of
/// redirect responses never leak into the final result.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = ResponseHead {
                status: line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|code| code.parse::<u32>().ok()),
                ..ResponseHead::default()
            };
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    head.content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-range") {
                head.content_range = parse_content_range(value);
            }
            if name.eq_ignore_ascii_case("accept-ranges") {
                head.accept_ranges = value.eq_ignore_ascii_case("bytes");
            }
        }
    }

    head
}

fn parse_content_range(value: &str) -> Option<ContentRange> {
    let (unit, rest) = value.split_once(' ')?;
    if !unit.eq_ignore_ascii_case("bytes") {
        return None;
    }
    let (span, total) = rest.trim().split_once('/')?;
    let total = match total.trim() {
        "*" => None,
        t => Some(t.parse::<u64>().ok()?),
    };
    let (start, end) = match span.trim() {
        "*" => (None, None),
        s => {
            let (a, b) = s.split_once('-')?;
            (Some(a.trim().parse::<u64>().ok()?), Some(b.trim().parse::<u64>().ok()?))
        }
    };
    Some(ContentRange { start, end, total })
}
