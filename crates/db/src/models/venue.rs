//! Venue entity model and DTOs.

use fyyur_core::location::Located;
use fyyur_core::schedule::{Scheduled, ShowSchedule};
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    /// Defaults to an empty list if omitted.
    pub genres: Option<Vec<String>>,
    /// Defaults to `false` if omitted.
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// DTO for updating an existing venue. All fields are optional; an empty
/// string clears an optional text field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Option<Vec<String>>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Listing entry for a venue: identity plus its upcoming show count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Located for VenueSummary {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// A show at a venue, joined with the performing artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub show_id: DbId,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Venue detail: the venue row with its shows split into past and upcoming.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowSchedule<VenueShow>,
}
