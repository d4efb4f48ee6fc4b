//! Shared response envelope types for API handlers.
//!
//! List responses use a `{ "data": ... }` envelope; search responses add the
//! match count. Single entities are returned bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "count": n, "data": [...] }` envelope for search results.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> SearchResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
