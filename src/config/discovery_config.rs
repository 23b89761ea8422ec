use crate::{
    discovery::{
        DEFAULT_PAGE, DEFAULT_PER_PAGE, DiscoveryParams, DiscoveryParamsBuilder, DiscoveryPaths,
        DiscoverySort,
    },
    error::Error,
};
use serde_derive::{Deserialize, Serialize};

/// Configuration for the discovery parameters decoding.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Page used when parameters are constructed from scratch.
    pub page: i32,
    /// Page size used when parameters are constructed from scratch.
    pub per_page: i32,
    /// Sort order used when parameters are constructed from scratch.
    pub sort: DiscoverySort,
    /// Regular expression that matches category listing paths.
    pub categories_path_pattern: String,
    /// Regular expression that matches place listing paths.
    pub places_path_pattern: String,
}

impl DiscoveryConfig {
    /// Returns builder seeded with the configured defaults.
    pub fn builder<'a>(&self) -> DiscoveryParamsBuilder<'a> {
        DiscoveryParams::builder()
            .page(self.page)
            .per_page(self.per_page)
            .sort(self.sort)
    }

    /// Compiles the configured path patterns.
    pub fn paths(&self) -> Result<DiscoveryPaths, Error> {
        DiscoveryPaths::new(&self.categories_path_pattern, &self.places_path_pattern)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: DiscoverySort::Magic,
            categories_path_pattern: DiscoveryPaths::DEFAULT_CATEGORIES_PATTERN.to_string(),
            places_path_pattern: DiscoveryPaths::DEFAULT_PLACES_PATTERN.to_string(),
        }
    }
}
