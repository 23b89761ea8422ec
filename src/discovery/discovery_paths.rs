use crate::error::Error;
use regex::Regex;

/// Recognizes the special path shapes of the discovery URIs.
pub trait DiscoveryPathMatcher {
    /// Checks whether the path points to a category listing, e.g. `/discover/categories/art`.
    fn is_categories_path(&self, path: &str) -> bool;
    /// Checks whether the path points to a place listing, e.g. `/discover/places/brooklyn-ny`.
    fn is_places_path(&self, path: &str) -> bool;
}

/// Path-shape matcher backed by regular expressions.
#[derive(Debug, Clone)]
pub struct DiscoveryPaths {
    categories: Regex,
    places: Regex,
}

impl DiscoveryPaths {
    pub const DEFAULT_CATEGORIES_PATTERN: &'static str = "^/discover/categories/.*";
    pub const DEFAULT_PLACES_PATTERN: &'static str = "^/discover/places/[a-zA-Z0-9_-]+$";

    /// Compiles matcher from the categories and places path patterns.
    pub fn new(categories_pattern: &str, places_pattern: &str) -> Result<Self, Error> {
        Ok(Self {
            categories: Regex::new(categories_pattern)?,
            places: Regex::new(places_pattern)?,
        })
    }
}

impl Default for DiscoveryPaths {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CATEGORIES_PATTERN,
            Self::DEFAULT_PLACES_PATTERN,
        )
        .expect("Default discovery path patterns must be valid.")
    }
}

impl DiscoveryPathMatcher for DiscoveryPaths {
    fn is_categories_path(&self, path: &str) -> bool {
        self.categories.is_match(path)
    }

    fn is_places_path(&self, path: &str) -> bool {
        self.places.is_match(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{DiscoveryPathMatcher, DiscoveryPaths};
    use crate::error::Error;

    #[test]
    fn matches_categories_paths() {
        let paths = DiscoveryPaths::default();

        assert!(paths.is_categories_path("/discover/categories/art"));
        assert!(paths.is_categories_path("/discover/categories/art/painting"));

        assert!(!paths.is_categories_path("/discover/categories"));
        assert!(!paths.is_categories_path("/discover/places/brooklyn-ny"));
        assert!(!paths.is_categories_path("/projects/creator/sketchbook"));
    }

    #[test]
    fn matches_places_paths() {
        let paths = DiscoveryPaths::default();

        assert!(paths.is_places_path("/discover/places/brooklyn-ny"));
        assert!(paths.is_places_path("/discover/places/new_york"));

        assert!(!paths.is_places_path("/discover/places/"));
        assert!(!paths.is_places_path("/discover/places/brooklyn/ny"));
        assert!(!paths.is_places_path("/discover/categories/art"));
    }

    #[test]
    fn can_use_custom_patterns() -> anyhow::Result<()> {
        let paths = DiscoveryPaths::new("^/c/[a-z]+$", "^/p/[a-z]+$")?;

        assert!(paths.is_categories_path("/c/art"));
        assert!(!paths.is_categories_path("/discover/categories/art"));
        assert!(paths.is_places_path("/p/brooklyn"));
        assert!(!paths.is_places_path("/discover/places/brooklyn"));

        Ok(())
    }

    #[test]
    fn fails_for_invalid_patterns() {
        assert!(matches!(
            DiscoveryPaths::new("^/c/(", DiscoveryPaths::DEFAULT_PLACES_PATTERN),
            Err(Error::InvalidPathPattern(_))
        ));
    }
}
