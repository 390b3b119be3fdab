//! Author directory client: request construction and response decoding.
//!
//! The network call itself belongs to the host. [`AuthorClient`] builds the
//! request the host should perform and decodes whatever comes back into a
//! typed outcome. It keeps no retry state, so it can be asked for a request
//! any number of times.

use crate::client::request::{FetchRequest, REQUEST_ID_KEY};
use crate::domain::{AuthorRecord, FetchError};
use std::collections::BTreeMap;

/// Default directory endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://cdn.freecodecamp.org/curriculum/news-author-page/authors.json";

/// Maximum number of body characters kept in a status error's detail.
const ERROR_DETAIL_MAX_CHARS: usize = 160;

/// Builds directory requests and decodes their responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorClient {
    endpoint: String,
    last_request_id: u64,
}

impl Default for AuthorClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl AuthorClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            last_request_id: 0,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Allocates a fresh request id and describes one GET of the endpoint.
    pub fn next_request(&mut self) -> FetchRequest {
        self.last_request_id = self.last_request_id.wrapping_add(1);
        let id = self.last_request_id;

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let mut context = BTreeMap::new();
        context.insert(REQUEST_ID_KEY.to_string(), id.to_string());

        tracing::debug!(request_id = id, url = %self.endpoint, "built directory request");

        FetchRequest {
            id,
            url: self.endpoint.clone(),
            headers,
            context,
        }
    }

    /// Decodes a host response into author records.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] for any status outside `200..=299`; the host
    ///   reports transport failures this way too, with the failure text in
    ///   the body
    /// - [`FetchError::Parse`] when the body is not UTF-8, not a JSON array,
    ///   or holds items that are not author records
    ///
    /// # Examples
    ///
    /// ```
    /// use authorgrid::client::AuthorClient;
    ///
    /// let body = br#"[{"author": "Ada", "image": "", "url": "https://x/ada", "bio": null}]"#;
    /// let records = AuthorClient::parse_response(200, body).unwrap();
    /// assert_eq!(records[0].author, "Ada");
    ///
    /// let err = AuthorClient::parse_response(500, b"boom").unwrap_err();
    /// assert!(err.to_string().contains("500"));
    /// ```
    pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<AuthorRecord>, FetchError> {
        if !(200..=299).contains(&status) {
            let detail = Self::error_detail(body);
            tracing::debug!(status = status, detail = %detail, "directory request failed");
            return Err(FetchError::Status { status, detail });
        }

        let text = std::str::from_utf8(body)
            .map_err(|e| FetchError::Parse(format!("body is not UTF-8: {e}")))?;

        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| FetchError::Parse(format!("body is not JSON: {e}")))?;

        if !value.is_array() {
            return Err(FetchError::Parse("expected a JSON array of authors".to_string()));
        }

        let records: Vec<AuthorRecord> = serde_json::from_value(value)
            .map_err(|e| FetchError::Parse(format!("unexpected author shape: {e}")))?;

        tracing::debug!(record_count = records.len(), "directory response decoded");
        Ok(records)
    }

    /// Short, single-line excerpt of an error body.
    fn error_detail(body: &[u8]) -> String {
        let text = String::from_utf8_lossy(body);
        let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
        line.chars().take(ERROR_DETAIL_MAX_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::request_id_from_context;

    #[test]
    fn request_ids_increase_and_round_trip_through_context() {
        let mut client = AuthorClient::new("https://example.test/authors.json");

        let first = client.next_request();
        let second = client.next_request();

        assert_eq!(first.id + 1, second.id);
        assert_eq!(second.url, "https://example.test/authors.json");
        assert_eq!(request_id_from_context(&second.context), Some(second.id));
        assert_eq!(first.headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn unknown_context_has_no_request_id() {
        let mut context = BTreeMap::new();
        assert_eq!(request_id_from_context(&context), None);
        context.insert(REQUEST_ID_KEY.to_string(), "abc".to_string());
        assert_eq!(request_id_from_context(&context), None);
    }

    #[test]
    fn non_success_status_is_a_status_error() {
        let err = AuthorClient::parse_response(404, b"  Not\n Found ").unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 404,
                detail: "Not Found".to_string()
            }
        );
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        let err = AuthorClient::parse_response(200, br#"{"author": "Ada"}"#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(AuthorClient::parse_response(200, b"[{").unwrap_err().is_parse());
        assert!(AuthorClient::parse_response(200, &[0xff, 0xfe]).unwrap_err().is_parse());
    }

    #[test]
    fn wrong_item_shape_is_a_parse_error() {
        let err = AuthorClient::parse_response(200, br#"[{"author": 1}]"#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn empty_array_is_a_valid_empty_directory() {
        assert!(AuthorClient::parse_response(204, b"[]").unwrap().is_empty());
    }
}
