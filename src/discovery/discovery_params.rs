use crate::{
    discovery::{DiscoveryParamsBuilder, DiscoverySort, FilterLabel},
    models::{Category, Location, Project},
};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};
use url::{Url, form_urlencoded};

/// Default page used when parameters are constructed from scratch.
pub const DEFAULT_PAGE: i32 = 1;
/// Default page size used when parameters are constructed from scratch.
pub const DEFAULT_PER_PAGE: i32 = 15;

/// Immutable set of project discovery filters and pagination options. Every field is optional and
/// absent fields never contribute to the encoded query. Use [`DiscoveryParamsBuilder`] to derive
/// new instances.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryParams<'a> {
    /// `1` selects only the projects the user has backed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) backed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) category: Option<&'a Category>,
    /// Raw category identifier as it appeared in the URI, used until the category is resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) category_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) location: Option<&'a Location>,
    /// Raw location identifier as it appeared in the URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) location_param: Option<String>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) page: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) per_page: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) staff_picks: Option<bool>,
    /// `1` selects only the projects the user has saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) starred: Option<i32>,
    /// `1` selects only the projects backed by the people the user follows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) social: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) sort: Option<DiscoverySort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) recommended: Option<bool>,
    /// Project to find similar projects for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) similar_to: Option<&'a Project>,
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) term: Option<String>,
}

impl<'a> DiscoveryParams<'a> {
    /// Returns builder seeded with the from-scratch defaults: first page, 15 projects per page,
    /// and the `magic` sort order.
    pub fn builder() -> DiscoveryParamsBuilder<'a> {
        DiscoveryParamsBuilder::default()
            .page(DEFAULT_PAGE)
            .per_page(DEFAULT_PER_PAGE)
            .sort(DiscoverySort::Magic)
    }

    /// Returns builder pre-populated with all fields of these parameters.
    pub fn to_builder(&self) -> DiscoveryParamsBuilder<'a> {
        DiscoveryParamsBuilder::from(self.clone())
    }

    /// Returns parameters for the page following the current one. Parameters without a page are
    /// returned unchanged.
    pub fn next_page(&self) -> Self {
        match self.page {
            Some(page) => self.to_builder().page(page.saturating_add(1)).build(),
            None => self.clone(),
        }
    }

    pub fn backed(&self) -> Option<i32> {
        self.backed
    }

    pub fn category(&self) -> Option<&'a Category> {
        self.category
    }

    pub fn category_param(&self) -> Option<&str> {
        self.category_param.as_deref()
    }

    pub fn location(&self) -> Option<&'a Location> {
        self.location
    }

    pub fn location_param(&self) -> Option<&str> {
        self.location_param.as_deref()
    }

    pub fn page(&self) -> Option<i32> {
        self.page
    }

    pub fn per_page(&self) -> Option<i32> {
        self.per_page
    }

    pub fn staff_picks(&self) -> Option<bool> {
        self.staff_picks
    }

    pub fn starred(&self) -> Option<i32> {
        self.starred
    }

    pub fn social(&self) -> Option<i32> {
        self.social
    }

    pub fn sort(&self) -> Option<DiscoverySort> {
        self.sort
    }

    pub fn recommended(&self) -> Option<bool> {
        self.recommended
    }

    pub fn similar_to(&self) -> Option<&'a Project> {
        self.similar_to
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Checks whether a resolved category is set. A raw category parameter doesn't count.
    pub fn is_category_set(&self) -> bool {
        self.category.is_some()
    }

    /// Picks the single label that best describes the current filter.
    pub fn filter_label(&self) -> FilterLabel<'a> {
        if self.staff_picks == Some(true) {
            FilterLabel::StaffPicks
        } else if self.starred == Some(1) {
            FilterLabel::Starred
        } else if self.backed == Some(1) {
            FilterLabel::Backed
        } else if self.social == Some(1) {
            FilterLabel::Social
        } else if let Some(category) = self.category {
            FilterLabel::Category(&category.name)
        } else if let Some(location) = self.location {
            FilterLabel::Location(&location.displayable_name)
        } else {
            FilterLabel::Everything
        }
    }

    /// Returns `base` URL with its query replaced by the encoded parameters.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);

        let query_params = self.sorted_query_params();
        if !query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(query_params);
        }

        url
    }

    fn sorted_query_params(&self) -> BTreeMap<&'static str, String> {
        self.query_params().into_iter().collect()
    }
}

impl Display for DiscoveryParams<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.sorted_query_params())
                .finish(),
        )
    }
}
