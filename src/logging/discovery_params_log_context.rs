use crate::discovery::{DiscoveryParams, DiscoverySort};
use serde::Serialize;

/// Represents a context for the discovery parameters used for the structured logging. Search terms
/// and raw identifiers are not included.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct DiscoveryParamsLogContext {
    /// Requested page, if any.
    pub page: Option<i32>,
    /// Requested page size, if any.
    pub per_page: Option<i32>,
    /// Requested sort order, if any.
    pub sort: Option<DiscoverySort>,
    /// Indicates whether a resolved category is set.
    pub category_set: bool,
    /// Indicates whether a search term is set.
    pub has_term: bool,
}

impl DiscoveryParams<'_> {
    /// Returns context used for the structured logging.
    pub fn log_context(&self) -> DiscoveryParamsLogContext {
        DiscoveryParamsLogContext {
            page: self.page(),
            per_page: self.per_page(),
            sort: self.sort(),
            category_set: self.is_category_set(),
            has_term: self.term().is_some(),
        }
    }
}
