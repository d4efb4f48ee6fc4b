//! Repository for the `shows` table.
//!
//! Show lists for a venue or artist are fetched with explicit joins here;
//! callers never walk relationships row by row.

use fyyur_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::ArtistShow;
use crate::models::show::{CreateShow, Show, ShowListing};
use crate::models::venue::VenueShow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, venue_id, start_time, created_at, updated_at";

/// Provides create and listing operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// Fails with a foreign-key violation if the artist or venue is missing.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(input.start_time)
            .fetch_one(pool)
            .await
    }

    /// Find a show by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all shows with venue and artist names, earliest first.
    pub async fn list_with_names(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// List the shows held at a venue, joined with their artists, earliest first.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.id AS show_id, s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// List the shows played by an artist, joined with their venues, earliest first.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}
