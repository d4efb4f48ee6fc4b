//! Handlers for the `/artists` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use fyyur_core::contact::{validate_required, ContactFields, MAX_TEXT_LENGTH};
use fyyur_core::error::CoreError;
use fyyur_core::genres::normalize_genres;
use fyyur_core::schedule::partition_shows;
use fyyur_core::search::{contains_pattern, normalize_term};
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{Artist, ArtistDetail, ArtistSummary, CreateArtist, UpdateArtist};
use fyyur_db::repositories::{ArtistRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::{DataResponse, SearchResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// Validate a create request and normalize its genres in place.
fn prepare_create(input: &mut CreateArtist) -> Result<(), CoreError> {
    validate_required("name", &input.name, None)?;
    validate_required("city", &input.city, Some(MAX_TEXT_LENGTH))?;
    validate_required("state", &input.state, Some(MAX_TEXT_LENGTH))?;
    ContactFields {
        phone: input.phone.as_deref(),
        website: input.website.as_deref(),
        image_link: input.image_link.as_deref(),
        facebook_link: input.facebook_link.as_deref(),
        seeking_description: input.seeking_description.as_deref(),
    }
    .validate()?;
    input.genres = Some(normalize_genres(input.genres.take())?);
    Ok(())
}

/// Validate an update request. Only provided fields are checked.
fn prepare_update(input: &mut UpdateArtist) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_required("name", name, None)?;
    }
    if let Some(city) = &input.city {
        validate_required("city", city, Some(MAX_TEXT_LENGTH))?;
    }
    if let Some(state) = &input.state {
        validate_required("state", state, Some(MAX_TEXT_LENGTH))?;
    }
    ContactFields {
        phone: input.phone.as_deref(),
        website: input.website.as_deref(),
        image_link: input.image_link.as_deref(),
        facebook_link: input.facebook_link.as_deref(),
        seeking_description: input.seeking_description.as_deref(),
    }
    .validate()?;
    if input.genres.is_some() {
        input.genres = Some(normalize_genres(input.genres.take())?);
    }
    Ok(())
}

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ArtistSummary>>>> {
    let artists = ArtistRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// GET /api/v1/artists/search?q=term
///
/// Case-insensitive substring search on the artist name.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse<ArtistSummary>>> {
    let term = normalize_term(params.q.as_deref());
    let artists = ArtistRepo::search(&state.pool, &contains_pattern(&term), Utc::now()).await?;
    tracing::debug!(term = %term, matches = artists.len(), "Artist search");
    Ok(Json(SearchResponse::new(artists)))
}

/// GET /api/v1/artists/{id}
///
/// The artist with its shows split into past and upcoming.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistDetail>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_artist(&state.pool, id).await?;

    Ok(Json(ArtistDetail {
        artist,
        shows: partition_shows(shows, Utc::now()),
    }))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    prepare_create(&mut input)?;
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    prepare_update(&mut input)?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(artist_id = id, "Artist updated");
    Ok(Json(artist))
}

/// DELETE /api/v1/artists/{id}
///
/// Also removes every show the artist was booked for.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match ArtistRepo::delete(&state.pool, id).await? {
        Some(name) => {
            tracing::info!(artist_id = id, name = %name, "Artist deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(not_found(id)),
    }
}
