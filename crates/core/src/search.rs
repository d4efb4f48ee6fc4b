//! Name search helpers.
//!
//! Searches are a case-insensitive substring match (`ILIKE`) on the name
//! column. The user's term is matched literally: LIKE wildcards inside it are
//! escaped before it is wrapped in `%...%`.

/// Escape character used in generated patterns. Repositories pass it to SQL
/// as `ESCAPE '\'`.
pub const LIKE_ESCAPE: char = '\\';

/// Trim a raw search term. A missing term is the empty string, which matches
/// every row.
pub fn normalize_term(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Build an `ILIKE` pattern matching names that contain `term`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
