//! Pagination types for list queries.
//!
//! These types implement Relay-style forward cursor pagination, commonly
//! used with GraphQL but also applicable to other APIs. The engine that
//! produces them lives in [`crate::pagination`].

/// Default page size when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Opaque cursor for pagination.
///
/// The cursor value is implementation-specific and should be treated
/// as an opaque token by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub value: String,
}

/// Pagination parameters for list queries (forward only).
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    /// Number of items to fetch. `None` or non-positive means "default".
    pub first: Option<i32>,
    /// Cursor to start after.
    pub after: Option<Cursor>,
}

impl Pagination {
    /// Request the first `n` items.
    pub fn first(n: i32) -> Self {
        Self {
            first: Some(n),
            after: None,
        }
    }

    /// Continue after the given cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(Cursor {
            value: cursor.into(),
        });
        self
    }
}

/// Page size bounds applied by the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
            max_limit: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Build limits, repairing nonsensical values (zero max, default above max).
    pub fn new(default_limit: u32, max_limit: u32) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            default_limit: default_limit.clamp(1, max_limit),
            max_limit,
        }
    }

    /// Effective page size for a requested `first`.
    ///
    /// Omitted or non-positive requests fall back to the default limit;
    /// everything is clamped to `[1, max_limit]`.
    pub fn effective(&self, first: Option<i32>) -> usize {
        let requested = match first {
            Some(n) if n > 0 => n as u32,
            _ => self.default_limit,
        };
        requested.clamp(1, self.max_limit.max(1)) as usize
    }
}

/// Paginated result set with edges and page info.
///
/// This is the Relay connection pattern for cursor-based pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<T> {
    /// List of edges (node + cursor pairs).
    pub edges: Vec<Edge<T>>,
    /// Information about the current page.
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// A page with no edges and no following page.
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// A single item in a paginated result.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    /// The actual item.
    pub node: T,
    /// Cursor for this item (used for pagination).
    pub cursor: Cursor,
}

/// Information about the current page in a paginated result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Cursor of the first item in this page.
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last item in this page.
    pub end_cursor: Option<Cursor>,
}
