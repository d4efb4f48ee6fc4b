//! Route definitions for the `/artists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /search     -> search
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list).post(artist::create))
        .route("/search", get(artist::search))
        .route(
            "/{id}",
            get(artist::get_by_id)
                .put(artist::update)
                .delete(artist::delete),
        )
}
