//! Fetch request description handed to the host transport.

use std::collections::BTreeMap;

/// Context key carrying the request id through the host and back.
pub const REQUEST_ID_KEY: &str = "request_id";

/// One GET request for the author directory.
///
/// The plugin shim turns this into a host `web_request` call. The `context`
/// map is echoed back verbatim with the response, which is how a completion
/// is matched to the fetch in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic id of this attempt.
    pub id: u64,

    /// Endpoint URL.
    pub url: String,

    /// Request headers.
    pub headers: BTreeMap<String, String>,

    /// Opaque context returned with the response.
    pub context: BTreeMap<String, String>,
}

/// Extracts the request id from a response context map.
///
/// Returns `None` when the key is missing or not a number, which happens for
/// web requests issued by something other than the author client.
#[must_use]
pub fn request_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(REQUEST_ID_KEY)?.parse().ok()
}
