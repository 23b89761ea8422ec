use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
}

impl Project {
    pub fn new<N: Into<String>>(id: i64, name: N) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Project;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<Project>(r#"{ "id": 1234, "name": "Sketchbook" }"#)?,
            Project::new(1234, "Sketchbook")
        );

        Ok(())
    }
}
