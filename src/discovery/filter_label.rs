use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Describes the dominant filter of the discovery parameters. Localization of the fixed labels is
/// up to the caller.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "name", rename_all = "camelCase")]
pub enum FilterLabel<'a> {
    /// Projects picked by the staff.
    StaffPicks,
    /// Projects saved by the user.
    Starred,
    /// Projects backed by the user.
    Backed,
    /// Projects backed by the people the user follows.
    Social,
    /// Projects from the category with the specified name.
    Category(&'a str),
    /// Projects from the location with the specified display name.
    Location(&'a str),
    /// No specific filter.
    Everything,
}

impl Display for FilterLabel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FilterLabel::StaffPicks => "staff_picks",
            FilterLabel::Starred => "starred",
            FilterLabel::Backed => "backed",
            FilterLabel::Social => "social",
            FilterLabel::Category(name) | FilterLabel::Location(name) => *name,
            FilterLabel::Everything => "everything",
        })
    }
}
