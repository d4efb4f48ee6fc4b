//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_db::models::show::{CreateShow, Show, ShowListing};
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/shows
///
/// Every show with its venue and artist, earliest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let shows = ShowRepo::list_with_names(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// POST /api/v1/shows
///
/// Both the artist and the venue must exist; a missing parent is a 404.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShow>,
) -> AppResult<(StatusCode, Json<Show>)> {
    if !ArtistRepo::exists(&state.pool, input.artist_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: input.artist_id,
        }));
    }
    if !VenueRepo::exists(&state.pool, input.venue_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id: input.venue_id,
        }));
    }

    let show = ShowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        start_time = %show.start_time,
        "Show listed"
    );
    Ok((StatusCode::CREATED, Json(show)))
}
