use serde::{Deserialize, Serialize};

/// Geographical location projects can be filtered by.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique "where on earth" id of the location.
    pub id: i64,
    /// Name of the location suitable for display, e.g. `Brooklyn, NY`.
    pub displayable_name: String,
}

impl Location {
    pub fn new<N: Into<String>>(id: i64, displayable_name: N) -> Self {
        Self {
            id,
            displayable_name: displayable_name.into(),
        }
    }
}
