/// Normalize a favorite for comparison: lowercase, then trim surrounding whitespace
///
/// An empty result means the slot is unset and takes part in no match.
#[inline]
pub fn normalize(item: &str) -> String {
    item.to_lowercase().trim().to_string()
}

/// Normalize every favorite in a list, keeping slot positions
pub fn normalize_all<S: AsRef<str>>(favorites: &[S]) -> Vec<String> {
    favorites.iter().map(|f| normalize(f.as_ref())).collect()
}
