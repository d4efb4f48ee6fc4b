//! Route definitions for the `/venues` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /           -> list_areas
/// POST   /           -> create
/// GET    /search     -> search
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list_areas).post(venue::create))
        .route("/search", get(venue::search))
        .route(
            "/{id}",
            get(venue::get_by_id)
                .put(venue::update)
                .delete(venue::delete),
        )
}
