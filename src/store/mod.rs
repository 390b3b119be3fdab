//! Client-side data layer: fetched records, search filtering and pagination.
//!
//! Everything in this module is synchronous and free of I/O. The event
//! handler owns one [`AuthorStore`] and one [`Paginator`] and is the only
//! code that mutates them.
//!
//! - [`authors`]: the record set and its filtered view
//! - [`filter`]: the pure search predicate
//! - [`paginator`]: the page cursor over the filtered view

pub mod authors;
pub mod filter;
pub mod paginator;

pub use authors::AuthorStore;
pub use filter::{matches, normalize_query};
pub use paginator::{Paginator, DEFAULT_PAGE_SIZE};
