//! Repository for the `artists` table.

use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistSummary, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, website, image_link, facebook_link, \
    genres, seeking_venue, seeking_description, created_at, updated_at";

/// Summary projection with the number of shows starting at or after `$1`.
const SUMMARY_SELECT: &str = "SELECT a.id, a.name, \
    COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
    FROM artists a LEFT JOIN shows s ON s.artist_id = a.id";

/// Provides CRUD and search operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    ///
    /// Empty optional strings are stored as NULL. `genres` defaults to an
    /// empty list and `seeking_venue` to `false`.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, website, image_link,
                                  facebook_link, genres, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, NULLIF($4, ''), NULLIF($5, ''), NULLIF($6, ''),
                     NULLIF($7, ''), COALESCE($8, '{{}}'), COALESCE($9, FALSE), NULLIF($10, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an artist exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM artists WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List every artist with its upcoming show count, ordered by ID.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY a.id ORDER BY a.id");
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the artist name, ordered by ID.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE a.name ILIKE $2 ESCAPE '\\' GROUP BY a.id ORDER BY a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied; an
    /// empty string clears an optional text column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                phone = NULLIF(COALESCE($5, phone), ''),
                website = NULLIF(COALESCE($6, website), ''),
                image_link = NULLIF(COALESCE($7, image_link), ''),
                facebook_link = NULLIF(COALESCE($8, facebook_link), ''),
                genres = COALESCE($9, genres),
                seeking_venue = COALESCE($10, seeking_venue),
                seeking_description = NULLIF(COALESCE($11, seeking_description), ''),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist and, through the foreign-key cascade, all of its
    /// shows. Returns the deleted artist's name, or `None` if no row with the
    /// given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let name: Option<(String,)> =
            sqlx::query_as("SELECT name FROM artists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((name,)) = name else {
            return Ok(None);
        };

        let shows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE artist_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(artist_id = id, shows_removed = shows.0, "Artist deleted");
        Ok(Some(name))
    }
}
