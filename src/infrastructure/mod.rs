//! Sandbox filesystem conventions: the host filesystem appears under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
