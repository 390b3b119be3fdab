//! Remote directory access.
//!
//! The plugin cannot open sockets itself; Zellij performs web requests on its
//! behalf and reports the result as an event. This module therefore splits a
//! fetch into the two halves the host needs:
//!
//! - [`request`]: the [`FetchRequest`] handed to the host, tagged with an id
//! - [`fetch`]: [`AuthorClient`], which allocates requests and decodes
//!   responses into `Result<Vec<AuthorRecord>, FetchError>`

pub mod fetch;
pub mod request;

pub use fetch::{AuthorClient, DEFAULT_ENDPOINT};
pub use request::{request_id_from_context, FetchRequest, REQUEST_ID_KEY};
