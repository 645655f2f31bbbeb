//! Remote emoji map client.
//!
//! Fetches the shortcode → image URL mapping from the GitHub emoji API
//! (or any endpoint serving the same JSON shape). The client is cacheless:
//! every call to [`EmojiMapClient::load`] issues a fresh request, and no
//! timeout is configured — a hung endpoint hangs the caller. That mirrors
//! the behavior of the page this tool replaces and keeps the failure
//! surface small: bad status, transport error, or unparsable body.

use std::collections::HashMap;

use thiserror::Error;

/// Default emoji mapping endpoint.
pub const GITHUB_EMOJI_ENDPOINT: &str = "https://api.github.com/emojis";

/// Mapping of shortcode (without colons) to absolute image URL.
pub type EmojiMap = HashMap<String, String>;

/// Errors from a single emoji map fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("emoji map request failed with HTTP {status}")]
    Status { status: u16 },
    /// The request never completed (DNS, TLS, connection, ...).
    #[error("emoji map request failed: {0}")]
    Transport(Box<ureq::Error>),
    /// The response body was not a JSON object of strings.
    #[error("emoji map response was not valid JSON: {0}")]
    Parse(#[source] std::io::Error),
}

/// Thin, cacheless HTTP client for the emoji map.
pub struct EmojiMapClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl EmojiMapClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: ureq::Agent::new(),
        }
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the emoji map. One round trip, no retry, no cache.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-2xx responses,
    /// [`FetchError::Transport`] when the request itself fails and
    /// [`FetchError::Parse`] when the body is not the expected JSON object.
    pub fn load(&self) -> Result<EmojiMap, FetchError> {
        match self.agent.get(&self.endpoint).call() {
            Ok(response) => response.into_json::<EmojiMap>().map_err(FetchError::Parse),
            Err(ureq::Error::Status(status, _)) => Err(FetchError::Status { status }),
            Err(err) => Err(FetchError::Transport(Box::new(err))),
        }
    }
}

impl Default for EmojiMapClient {
    fn default() -> Self {
        Self::new(GITHUB_EMOJI_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::{EmojiMapClient, FetchError};
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/emojis")
    }

    #[test]
    fn test_load_parses_json_object() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"smile":"https://img.example/smile.png","+1":"https://img.example/plus1.png"}"#,
        );
        let map = EmojiMapClient::new(url).load().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["smile"], "https://img.example/smile.png");
        assert_eq!(map["+1"], "https://img.example/plus1.png");
    }

    #[test]
    fn test_load_reports_http_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "{}");
        let err = EmojiMapClient::new(url).load().unwrap_err();
        match err {
            FetchError::Status { status } => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reports_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK", "not json at all");
        let err = EmojiMapClient::new(url).load().unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_load_reports_transport_failure() {
        // Nothing listens here; the connection is refused immediately.
        let client = EmojiMapClient::new("http://127.0.0.1:1/emojis");
        let err = client.load().unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
