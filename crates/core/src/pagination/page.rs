//! Page builder.
//!
//! Orders a caller-filtered collection by `(created_at, id)`, resolves
//! the `after` cursor to a position in that order and cuts a window of
//! at most `limit` edges.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::error::DomainResult;
use crate::models::iso_timestamp;
use crate::ports::{Connection, Cursor, Edge, PageInfo, PageLimits, Pagination};

use super::cursor::{CursorPayload, decode_cursor, encode_cursor};

/// Anything that can be placed on a page.
///
/// `id` must be unique within a partition. Neither the rendered
/// timestamp nor the id may contain `#`.
pub trait PageItem {
    /// Creation instant. Not required to be unique.
    fn created_at(&self) -> DateTime<Utc>;
    /// Unique identifier within the partition.
    fn id(&self) -> &str;
}

/// Why a supplied cursor resolved to no position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorMiss {
    /// The cursor was issued under another partition.
    PartitionMismatch { expected: String, found: String },
    /// The item the cursor points at is no longer in the collection.
    StalePosition { sort_key: String },
}

impl CursorMiss {
    /// Short label, suitable for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            CursorMiss::PartitionMismatch { .. } => "partition_mismatch",
            CursorMiss::StalePosition { .. } => "stale_position",
        }
    }
}

/// Composite sort key `<createdAt>#<id>`.
pub fn sort_key<T: PageItem>(item: &T) -> String {
    format!("{}#{}", iso_timestamp(&item.created_at()), item.id())
}

/// Order by `created_at` at millisecond precision, then by id.
///
/// Sub-millisecond differences are invisible in the sort key, so they must
/// not influence the order either.
fn canonical_order<T: PageItem>(a: &T, b: &T) -> Ordering {
    a.created_at()
        .timestamp_millis()
        .cmp(&b.created_at().timestamp_millis())
        .then_with(|| a.id().cmp(b.id()))
}

fn cursor_for<T: PageItem>(partition_key: &str, item: &T) -> Cursor {
    Cursor {
        value: encode_cursor(&CursorPayload::new(partition_key, sort_key(item))),
    }
}

/// Build one page of `items` within `partition_key`.
///
/// A cursor from another partition, or one pointing at an item that is
/// gone, yields an empty page. Undecodable cursors are an error.
pub fn paginate<T: PageItem>(
    items: Vec<T>,
    partition_key: &str,
    pagination: &Pagination,
    limits: PageLimits,
) -> DomainResult<Connection<T>> {
    paginate_with_diagnostics(items, partition_key, pagination, limits).map(|(page, _)| page)
}

/// Same as [`paginate`], also reporting why a cursor matched nothing.
pub fn paginate_with_diagnostics<T: PageItem>(
    mut items: Vec<T>,
    partition_key: &str,
    pagination: &Pagination,
    limits: PageLimits,
) -> DomainResult<(Connection<T>, Option<CursorMiss>)> {
    let limit = limits.effective(pagination.first);

    items.sort_by(canonical_order);

    let start = match &pagination.after {
        None => 0,
        Some(cursor) => {
            let payload = decode_cursor(&cursor.value)?;
            if payload.partition_key != partition_key {
                let miss = CursorMiss::PartitionMismatch {
                    expected: partition_key.to_string(),
                    found: payload.partition_key,
                };
                return Ok((Connection::empty(), Some(miss)));
            }
            match items.iter().position(|it| sort_key(it) == payload.sort_key) {
                Some(index) => index + 1,
                None => {
                    let miss = CursorMiss::StalePosition {
                        sort_key: payload.sort_key,
                    };
                    return Ok((Connection::empty(), Some(miss)));
                }
            }
        }
    };

    // One extra item tells us whether another page follows.
    let mut window: Vec<T> = items.into_iter().skip(start).take(limit + 1).collect();
    let has_next_page = window.len() > limit;
    window.truncate(limit);

    let edges: Vec<Edge<T>> = window
        .into_iter()
        .map(|node| Edge {
            cursor: cursor_for(partition_key, &node),
            node,
        })
        .collect();

    let page_info = PageInfo {
        has_next_page,
        has_previous_page: start > 0 && !edges.is_empty(),
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Ok((Connection { edges, page_info }, None))
}
