//! Artist entity model and DTOs.

use fyyur_core::schedule::{Scheduled, ShowSchedule};
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    /// Defaults to an empty list if omitted.
    pub genres: Option<Vec<String>>,
    /// Defaults to `false` if omitted.
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// DTO for updating an existing artist. All fields are optional; an empty
/// string clears an optional text field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Option<Vec<String>>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Listing entry for an artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A show by an artist, joined with the hosting venue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub show_id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Artist detail: the artist row with its shows split into past and upcoming.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowSchedule<ArtistShow>,
}
