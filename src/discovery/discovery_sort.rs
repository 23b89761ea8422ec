use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Order in which discovered projects are returned. Wire tokens are shared with the discovery API
/// and must not change.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DiscoverySort {
    /// Default, relevance-based order.
    #[default]
    #[serde(rename = "magic")]
    Magic,
    #[serde(rename = "popularity")]
    Popular,
    #[serde(rename = "end_date")]
    EndingSoon,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "most_funded")]
    MostFunded,
}

impl DiscoverySort {
    /// All supported sort orders.
    pub const ALL: [DiscoverySort; 5] = [
        DiscoverySort::Magic,
        DiscoverySort::Popular,
        DiscoverySort::EndingSoon,
        DiscoverySort::Newest,
        DiscoverySort::MostFunded,
    ];

    /// Returns the wire token of the sort order.
    pub const fn as_token(&self) -> &'static str {
        match self {
            DiscoverySort::Magic => "magic",
            DiscoverySort::Popular => "popularity",
            DiscoverySort::EndingSoon => "end_date",
            DiscoverySort::Newest => "newest",
            DiscoverySort::MostFunded => "most_funded",
        }
    }
}

impl FromStr for DiscoverySort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "magic" => Ok(DiscoverySort::Magic),
            "popularity" => Ok(DiscoverySort::Popular),
            "end_date" => Ok(DiscoverySort::EndingSoon),
            "newest" => Ok(DiscoverySort::Newest),
            "most_funded" => Ok(DiscoverySort::MostFunded),
            token => Err(Error::UnknownSortToken(token.to_string())),
        }
    }
}

impl Display for DiscoverySort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::DiscoverySort;
    use crate::error::Error;
    use insta::{assert_json_snapshot, assert_snapshot};

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(DiscoverySort::Magic, @r###""magic""###);
        assert_json_snapshot!(DiscoverySort::Popular, @r###""popularity""###);
        assert_json_snapshot!(DiscoverySort::EndingSoon, @r###""end_date""###);
        assert_json_snapshot!(DiscoverySort::Newest, @r###""newest""###);
        assert_json_snapshot!(DiscoverySort::MostFunded, @r###""most_funded""###);

        Ok(())
    }

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<DiscoverySort>(r#""end_date""#)?,
            DiscoverySort::EndingSoon
        );
        assert!(serde_json::from_str::<DiscoverySort>(r#""trending""#).is_err());

        Ok(())
    }

    #[test]
    fn string_representation() -> anyhow::Result<()> {
        assert_snapshot!(DiscoverySort::Magic, @"magic");
        assert_snapshot!(DiscoverySort::Popular, @"popularity");
        assert_snapshot!(DiscoverySort::EndingSoon, @"end_date");
        assert_snapshot!(DiscoverySort::Newest, @"newest");
        assert_snapshot!(DiscoverySort::MostFunded, @"most_funded");

        Ok(())
    }

    #[test]
    fn every_token_round_trips() -> anyhow::Result<()> {
        for sort in DiscoverySort::ALL {
            assert_eq!(sort.as_token().parse::<DiscoverySort>()?, sort);
            assert_eq!(serde_json::to_string(&sort)?, format!(r#""{sort}""#));
        }

        Ok(())
    }

    #[test]
    fn fails_for_unknown_tokens() {
        assert!(matches!(
            "MAGIC".parse::<DiscoverySort>(),
            Err(Error::UnknownSortToken(token)) if token == "MAGIC"
        ));
        assert!(matches!(
            "".parse::<DiscoverySort>(),
            Err(Error::UnknownSortToken(_))
        ));
    }

    #[test]
    fn defaults_to_magic() {
        assert_eq!(DiscoverySort::default(), DiscoverySort::Magic);
    }
}
