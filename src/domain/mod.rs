//! Domain layer for the authorgrid plugin.
//!
//! Core types independent of Zellij APIs: the author record served by the
//! directory endpoint and the error taxonomy.
//!
//! - [`author`]: the [`AuthorRecord`] model
//! - [`error`]: [`FetchError`], [`AuthorGridError`] and the `Result` alias

pub mod author;
pub mod error;

pub use author::AuthorRecord;
pub use error::{AuthorGridError, FetchError, Result};
