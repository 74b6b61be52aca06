//! Slug derivation for model names
//!
//! Model slugs are derived deterministically from the display name:
//! lowercase, with every run of non-alphanumeric characters collapsed to a
//! single hyphen. Uniqueness is enforced by the store, not here.

/// Derive a URL-safe slug from a display name.
///
/// # Examples
///
/// ```
/// use terralux_common::slugify;
///
/// assert_eq!(slugify("24ft Geodesic Dome"), "24ft-geodesic-dome");
/// assert_eq!(slugify("House Zero"), "house-zero");
/// assert_eq!(slugify("Arkup 75"), "arkup-75");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(slugify("24ft Geodesic Dome"), "24ft-geodesic-dome");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(
            slugify("Arkup 75 -- Floating Villa"),
            "arkup-75-floating-villa"
        );
    }

    #[test]
    fn test_leading_and_trailing_separators_trimmed() {
        assert_eq!(slugify("  House Zero!  "), "house-zero");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(slugify("Renew Series 1200"), slugify("Renew Series 1200"));
    }

    #[test]
    fn test_unicode_letters_lowercased() {
        assert_eq!(slugify("ÖÖD 1"), "ööd-1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
    }
}
