//! Domain logic for the Fyyur booking service.
//!
//! Everything here is pure: no database or HTTP dependencies, so the db and
//! api crates (and their tests) can share one definition of each rule.

pub mod contact;
pub mod error;
pub mod genres;
pub mod location;
pub mod schedule;
pub mod search;
pub mod types;
