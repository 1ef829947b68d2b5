//! Cursor pagination engine.
//!
//! Two pieces, both pure and synchronous:
//!
//! - [`cursor`] - encodes a `(partition, sort key)` pair into an opaque token and back
//! - [`page`] - orders a collection, resolves a cursor and cuts a page
//!
//! Callers fetch and filter a partition's items first; the engine never
//! looks at domain fields beyond [`PageItem`].

pub mod cursor;
pub mod page;

pub use cursor::{CursorPayload, decode_cursor, encode_cursor};
pub use page::{CursorMiss, PageItem, paginate, paginate_with_diagnostics, sort_key};
