//! Repository for the `venues` table.

use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, website, image_link, \
    facebook_link, genres, seeking_talent, seeking_description, created_at, updated_at";

/// Summary projection with the number of shows starting at or after `$1`.
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.city, v.state, \
    COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
    FROM venues v LEFT JOIN shows s ON s.venue_id = v.id";

/// Provides CRUD and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    ///
    /// Empty optional strings are stored as NULL. `genres` defaults to an
    /// empty list and `seeking_talent` to `false`.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, website, image_link,
                                 facebook_link, genres, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, NULLIF($5, ''), NULLIF($6, ''), NULLIF($7, ''),
                     NULLIF($8, ''), COALESCE($9, '{{}}'), COALESCE($10, FALSE), NULLIF($11, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a venue exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM venues WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List every venue with its upcoming show count, ordered by ID.
    ///
    /// A show is upcoming when it starts at or after `now`.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY v.id ORDER BY v.id");
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name, ordered by ID.
    ///
    /// `pattern` is an `ILIKE` pattern built by
    /// [`fyyur_core::search::contains_pattern`].
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE v.name ILIKE $2 ESCAPE '\\' GROUP BY v.id ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a venue. Only non-`None` fields in `input` are applied; an
    /// empty string clears an optional text column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                address = COALESCE($5, address),
                phone = NULLIF(COALESCE($6, phone), ''),
                website = NULLIF(COALESCE($7, website), ''),
                image_link = NULLIF(COALESCE($8, image_link), ''),
                facebook_link = NULLIF(COALESCE($9, facebook_link), ''),
                genres = COALESCE($10, genres),
                seeking_talent = COALESCE($11, seeking_talent),
                seeking_description = NULLIF(COALESCE($12, seeking_description), ''),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue and, through the foreign-key cascade, all of its shows.
    ///
    /// Runs in a transaction so the reported show count matches what was
    /// removed. Returns the deleted venue's name, or `None` if no row with the
    /// given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let name: Option<(String,)> =
            sqlx::query_as("SELECT name FROM venues WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((name,)) = name else {
            return Ok(None);
        };

        let shows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(venue_id = id, shows_removed = shows.0, "Venue deleted");
        Ok(Some(name))
    }
}
