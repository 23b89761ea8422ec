use serde::{Deserialize, Serialize};

/// Project category as known to the discovery service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique id of the category.
    pub id: i64,
    /// Human-readable name of the category.
    pub name: String,
}

impl Category {
    pub fn new<N: Into<String>>(id: i64, name: N) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
