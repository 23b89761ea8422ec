mod discovery_config;
mod raw_config;

pub use self::{discovery_config::DiscoveryConfig, raw_config::RawConfig};
