//! Minimal HTTP/1.1 server that supports Range GET for integration tests.
//!
//! Serves a single static body at any path. Responds to `Range: bytes=N-`
//! with 206 Partial Content (or 416 when N is past the end). Can be told to
//! ignore ranges, answer every request with a fixed error status, or cut the
//! first few responses short. Records every request it sees.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct RangeServerOptions {
    /// If false, GET ignores Range and always returns 200 with the full body.
    pub support_ranges: bool,
    /// If set, every request gets this status and an empty body.
    pub status: Option<u16>,
    /// Number of initial responses that are cut short.
    pub cut_first: usize,
    /// Body bytes sent before closing a cut response.
    pub cut_after: usize,
}

impl Default for RangeServerOptions {
    fn default() -> Self {
        Self {
            support_ranges: true,
            status: None,
            cut_first: 0,
            cut_after: 0,
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
pub struct RangeServer {
    /// URL of the served file, e.g. "http://127.0.0.1:12345/unidic.zip".
    pub url: String,
    hits: Arc<AtomicUsize>,
    ranges: Arc<Mutex<Vec<Option<u64>>>>,
}

impl RangeServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Range start of each request, in arrival order (`None` = no Range header).
    pub fn ranges(&self) -> Vec<Option<u64>> {
        self.ranges.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `body`.
pub fn start(body: Vec<u8>) -> RangeServer {
    start_with_options(body, RangeServerOptions::default())
}

/// Like `start` but allows customizing server behavior (ranges ignored, errors, cuts).
pub fn start_with_options(body: Vec<u8>, opts: RangeServerOptions) -> RangeServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let ranges = Arc::new(Mutex::new(Vec::new()));
    {
        let hits = Arc::clone(&hits);
        let ranges = Arc::clone(&ranges);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let body = Arc::clone(&body);
                let hits = Arc::clone(&hits);
                let ranges = Arc::clone(&ranges);
                thread::spawn(move || handle(stream, &body, opts, &hits, &ranges));
            }
        });
    }
    RangeServer {
        url: format!("http://127.0.0.1:{}/unidic.zip", port),
        hits,
        ranges,
    }
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    opts: RangeServerOptions,
    hits: &AtomicUsize,
    ranges: &Mutex<Vec<Option<u64>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, range) = parse_request(request);
    ranges.lock().unwrap().push(range);
    let index = hits.fetch_add(1, Ordering::SeqCst);

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    if let Some(status) = opts.status {
        let response = format!(
            "HTTP/1.1 {} Test Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let total = body.len() as u64;
    let (status, content_range, slice) = match range.filter(|_| opts.support_ranges) {
        Some(start) if start >= total => (
            "416 Range Not Satisfiable",
            format!("bytes */{}", total),
            &body[0..0],
        ),
        Some(start) => (
            "206 Partial Content",
            format!("bytes {}-{}/{}", start, total - 1, total),
            &body[start as usize..],
        ),
        None => (
            "200 OK",
            format!("bytes 0-{}/{}", total.saturating_sub(1), total),
            body,
        ),
    };
    let accept_ranges = if opts.support_ranges {
        "Accept-Ranges: bytes\r\n"
    } else {
        ""
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Range: {}\r\n{}Connection: close\r\n\r\n",
        status,
        slice.len(),
        content_range,
        accept_ranges
    );
    let _ = stream.write_all(response.as_bytes());
    if index < opts.cut_first {
        let cut = opts.cut_after.min(slice.len());
        let _ = stream.write_all(&slice[..cut]);
        let _ = stream.flush();
        let _ = stream.shutdown(Shutdown::Both);
        return;
    }
    let _ = stream.write_all(slice);
}

/// Returns (method, start of `Range: bytes=N-` if present).
fn parse_request(request: &str) -> (&str, Option<u64>) {
    let mut method = "";
    let mut range = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if method.is_empty() {
            method = line.split_whitespace().next().unwrap_or("");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("range") {
                let value = value.trim();
                if value.to_lowercase().starts_with("bytes=") {
                    if let Some((a, _)) = value[6..].split_once('-') {
                        range = a.trim().parse::<u64>().ok();
                    }
                }
            }
        }
    }
    (method, range)
}
