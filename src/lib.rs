//! Project discovery parameters: an immutable set of discovery filter and pagination options that
//! can be decoded from a discovery URI, encoded into the discovery API query parameters, and
//! layered on top of each other.

pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod models;

pub use crate::{
    discovery::{DiscoveryParams, DiscoveryParamsBuilder, DiscoverySort},
    error::Error,
};
