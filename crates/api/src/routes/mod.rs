pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                     list grouped by area, create
/// /venues/search?q=           name search
/// /venues/{id}                detail, update, delete
///
/// /artists                    list, create
/// /artists/search?q=          name search
/// /artists/{id}               detail, update, delete
///
/// /shows                      list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
