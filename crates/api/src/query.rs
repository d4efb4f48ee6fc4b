//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Search parameters (`?q=`), used by venue and artist search.
///
/// A missing or blank `q` matches every record.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
