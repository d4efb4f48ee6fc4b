//! Handlers for the `/venues` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use fyyur_core::contact::{validate_required, ContactFields, MAX_TEXT_LENGTH};
use fyyur_core::error::CoreError;
use fyyur_core::genres::normalize_genres;
use fyyur_core::location::{group_by_location, LocationGroup};
use fyyur_core::schedule::partition_shows;
use fyyur_core::search::{contains_pattern, normalize_term};
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueDetail, VenueSummary};
use fyyur_db::repositories::{ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::{DataResponse, SearchResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

fn contact_fields_create(input: &CreateVenue) -> ContactFields<'_> {
    ContactFields {
        phone: input.phone.as_deref(),
        website: input.website.as_deref(),
        image_link: input.image_link.as_deref(),
        facebook_link: input.facebook_link.as_deref(),
        seeking_description: input.seeking_description.as_deref(),
    }
}

fn contact_fields_update(input: &UpdateVenue) -> ContactFields<'_> {
    ContactFields {
        phone: input.phone.as_deref(),
        website: input.website.as_deref(),
        image_link: input.image_link.as_deref(),
        facebook_link: input.facebook_link.as_deref(),
        seeking_description: input.seeking_description.as_deref(),
    }
}

/// Validate a create request and normalize its genres in place.
fn prepare_create(input: &mut CreateVenue) -> Result<(), CoreError> {
    validate_required("name", &input.name, None)?;
    validate_required("city", &input.city, Some(MAX_TEXT_LENGTH))?;
    validate_required("state", &input.state, Some(MAX_TEXT_LENGTH))?;
    validate_required("address", &input.address, Some(MAX_TEXT_LENGTH))?;
    contact_fields_create(input).validate()?;
    input.genres = Some(normalize_genres(input.genres.take())?);
    Ok(())
}

/// Validate an update request. Only provided fields are checked.
fn prepare_update(input: &mut UpdateVenue) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_required("name", name, None)?;
    }
    for (field, value) in [
        ("city", &input.city),
        ("state", &input.state),
        ("address", &input.address),
    ] {
        if let Some(value) = value {
            validate_required(field, value, Some(MAX_TEXT_LENGTH))?;
        }
    }
    contact_fields_update(input).validate()?;
    if input.genres.is_some() {
        input.genres = Some(normalize_genres(input.genres.take())?);
    }
    Ok(())
}

/// GET /api/v1/venues
///
/// All venues grouped by `(city, state)`, each with its upcoming show count.
pub async fn list_areas(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LocationGroup<VenueSummary>>>>> {
    let venues = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse {
        data: group_by_location(venues),
    }))
}

/// GET /api/v1/venues/search?q=term
///
/// Case-insensitive substring search on the venue name.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse<VenueSummary>>> {
    let term = normalize_term(params.q.as_deref());
    let venues = VenueRepo::search(&state.pool, &contains_pattern(&term), Utc::now()).await?;
    tracing::debug!(term = %term, matches = venues.len(), "Venue search");
    Ok(Json(SearchResponse::new(venues)))
}

/// GET /api/v1/venues/{id}
///
/// The venue with its shows split into past and upcoming.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VenueDetail>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;

    Ok(Json(VenueDetail {
        venue,
        shows: partition_shows(shows, Utc::now()),
    }))
}

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateVenue>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    prepare_create(&mut input)?;
    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
    Ok((StatusCode::CREATED, Json(venue)))
}

/// PUT /api/v1/venues/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateVenue>,
) -> AppResult<Json<Venue>> {
    prepare_update(&mut input)?;
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(venue_id = id, "Venue updated");
    Ok(Json(venue))
}

/// DELETE /api/v1/venues/{id}
///
/// Also removes every show held at the venue.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match VenueRepo::delete(&state.pool, id).await? {
        Some(name) => {
            tracing::info!(venue_id = id, name = %name, "Venue deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(not_found(id)),
    }
}
