//! Show entity model and DTOs.

use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling a new show.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// A show joined with its venue and artist names, as listed on `/shows`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}
