//! Genre tag normalization.

use crate::contact::MAX_TEXT_LENGTH;
use crate::error::CoreError;

/// Normalize a genre list supplied by a client.
///
/// - `None` means "no genres" and yields an empty list.
/// - A supplied list must be non-empty; each tag is trimmed, must be
///   non-blank and at most [`MAX_TEXT_LENGTH`] characters.
/// - Duplicates (case-insensitive) are dropped, keeping the first spelling.
pub fn normalize_genres(genres: Option<Vec<String>>) -> Result<Vec<String>, CoreError> {
    let Some(genres) = genres else {
        return Ok(Vec::new());
    };
    if genres.is_empty() {
        return Err(CoreError::Validation(
            "genres must contain at least one genre when provided".to_string(),
        ));
    }

    let mut normalized: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let tag = genre.trim();
        if tag.is_empty() {
            return Err(CoreError::Validation("genre must not be empty".to_string()));
        }
        if tag.chars().count() > MAX_TEXT_LENGTH {
            return Err(CoreError::Validation(format!(
                "genre exceeds maximum length of {MAX_TEXT_LENGTH} characters"
            )));
        }
        if !normalized.iter().any(|g| g.eq_ignore_ascii_case(tag)) {
            normalized.push(tag.to_string());
        }
    }
    Ok(normalized)
}
