//! Identifier derivation from display names.

/// Turn a display name into a lowercase, hyphen-joined identifier.
///
/// Non-ASCII text is transliterated first, so "Crème Brûlée" becomes
/// `creme-brulee`. Every run of anything other than letters and digits
/// collapses into one hyphen, and hyphens never lead or trail.
pub fn slugify(name: &str) -> String {
    ::slug::slugify(name)
}
