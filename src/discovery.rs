mod discovery_params;
mod discovery_params_builder;
mod discovery_paths;
mod discovery_query_params;
mod discovery_sort;
mod discovery_uri;
mod filter_label;
mod value_parsers;

pub use self::{
    discovery_params::{DEFAULT_PAGE, DEFAULT_PER_PAGE, DiscoveryParams},
    discovery_params_builder::DiscoveryParamsBuilder,
    discovery_paths::{DiscoveryPathMatcher, DiscoveryPaths},
    discovery_sort::DiscoverySort,
    filter_label::FilterLabel,
};
