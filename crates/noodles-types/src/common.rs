//! List wrappers, pagination and shared request pieces

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Offset pagination metadata returned with list payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    pub offset: u32,
    pub limit: u32,
}

/// Cursor pagination metadata returned with event feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPagination {
    /// Cursor to pass back for the next page (null when exhausted)
    pub last_cursor: Option<i64>,
    /// Timestamp of the last returned event
    pub last_timestamp: Option<i64>,
    pub limit: u32,
}

/// A list payload together with its pagination metadata, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T, P> {
    pub data: Vec<T>,
    pub pagination: P,
}

/// List payload paginated by offset
pub type OffsetPage<T> = Page<T, OffsetPagination>;

/// List payload paginated by cursor
pub type CursorPage<T> = Page<T, CursorPagination>;

impl<T> Page<T, CursorPagination> {
    /// Returns true if the feed has more events after this page
    pub fn has_more(&self) -> bool {
        self.pagination.last_cursor.is_some() && self.data.len() as u64 >= u64::from(self.pagination.limit)
    }
}

/// A list payload without pagination (`{data: [...]}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

impl<T> DataList<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Pagination options for POST list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TypedBuilder)]
pub struct PaginationParams {
    /// Maximum number of results to return
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of results to skip
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Coin filter for POST list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TypedBuilder)]
pub struct CoinFilters {
    /// Restrict results to these coin types
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_ids: Option<Vec<String>>,
}

/// Serialize a list of identifiers as one comma-separated string
///
/// Query strings cannot carry arrays, so multi-id GET endpoints take `a,b,c`.
pub mod comma_separated {
    use serde::Serializer;

    pub fn serialize<S, I>(items: I, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                joined.push(',');
            }
            joined.push_str(item.as_ref());
        }
        serializer.serialize_str(&joined)
    }
}
