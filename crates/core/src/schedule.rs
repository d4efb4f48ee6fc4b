//! Past/upcoming show classification.
//!
//! Detail pages for venues and artists split their shows around the current
//! time. The split is done here on already-fetched rows so it can be tested
//! without a database and reused by both entity types.

use serde::Serialize;

use crate::types::Timestamp;

/// A row that has a scheduled start time.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Shows of one venue or artist, partitioned relative to a reference time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowSchedule<T> {
    /// Shows starting at or after the reference time, earliest first.
    pub upcoming_shows: Vec<T>,
    /// Shows that started before the reference time, earliest first.
    pub past_shows: Vec<T>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

impl<T> ShowSchedule<T> {
    /// Total number of shows across both partitions.
    pub fn total(&self) -> usize {
        self.upcoming_shows_count + self.past_shows_count
    }
}

/// Partition `shows` into upcoming (`start_time >= now`) and past
/// (`start_time < now`).
///
/// A show starting exactly at `now` is upcoming. Both partitions are sorted
/// by start time ascending; the sort is stable, so rows with equal start
/// times keep their input order.
pub fn partition_shows<T: Scheduled>(mut shows: Vec<T>, now: Timestamp) -> ShowSchedule<T> {
    shows.sort_by_key(|show| show.start_time());

    let (upcoming_shows, past_shows): (Vec<T>, Vec<T>) =
        shows.into_iter().partition(|show| show.start_time() >= now);

    ShowSchedule {
        upcoming_shows_count: upcoming_shows.len(),
        past_shows_count: past_shows.len(),
        upcoming_shows,
        past_shows,
    }
}
