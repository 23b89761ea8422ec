use crate::{
    discovery::{DiscoveryParams, DiscoverySort},
    models::{Category, Location, Project},
};

/// Accumulates discovery parameters and produces immutable [`DiscoveryParams`] snapshots. A
/// default builder has no fields set, use [`DiscoveryParams::builder`] to start from the
/// from-scratch defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoveryParamsBuilder<'a> {
    pub(super) params: DiscoveryParams<'a>,
}

impl<'a> DiscoveryParamsBuilder<'a> {
    pub fn backed(self, backed: i32) -> Self {
        self.update(|params| params.backed = Some(backed))
    }

    pub fn category(self, category: &'a Category) -> Self {
        self.update(|params| params.category = Some(category))
    }

    pub fn category_param<P: Into<String>>(self, category_param: P) -> Self {
        let category_param = category_param.into();
        self.update(|params| params.category_param = Some(category_param))
    }

    pub fn location(self, location: &'a Location) -> Self {
        self.update(|params| params.location = Some(location))
    }

    pub fn location_param<P: Into<String>>(self, location_param: P) -> Self {
        let location_param = location_param.into();
        self.update(|params| params.location_param = Some(location_param))
    }

    pub fn page(self, page: i32) -> Self {
        self.update(|params| params.page = Some(page))
    }

    pub fn per_page(self, per_page: i32) -> Self {
        self.update(|params| params.per_page = Some(per_page))
    }

    pub fn staff_picks(self, staff_picks: bool) -> Self {
        self.update(|params| params.staff_picks = Some(staff_picks))
    }

    pub fn starred(self, starred: i32) -> Self {
        self.update(|params| params.starred = Some(starred))
    }

    pub fn social(self, social: i32) -> Self {
        self.update(|params| params.social = Some(social))
    }

    pub fn sort(self, sort: DiscoverySort) -> Self {
        self.update(|params| params.sort = Some(sort))
    }

    pub fn recommended(self, recommended: bool) -> Self {
        self.update(|params| params.recommended = Some(recommended))
    }

    pub fn similar_to(self, similar_to: &'a Project) -> Self {
        self.update(|params| params.similar_to = Some(similar_to))
    }

    pub fn term<T: Into<String>>(self, term: T) -> Self {
        let term = term.into();
        self.update(|params| params.term = Some(term))
    }

    /// Returns a snapshot of the current builder state.
    pub fn build(&self) -> DiscoveryParams<'a> {
        self.params.clone()
    }

    /// Layers `other` on top of this builder: every field set on `other` replaces the value of
    /// this builder, fields that aren't set on `other` are left untouched. Referenced entities are
    /// replaced as a whole.
    pub fn merge_with(self, other: &DiscoveryParamsBuilder<'a>) -> Self {
        let other = other.build();
        let mut merged = self;

        if let Some(backed) = other.backed {
            merged = merged.backed(backed);
        }
        if let Some(category) = other.category {
            merged = merged.category(category);
        }
        if let Some(category_param) = other.category_param {
            merged = merged.category_param(category_param);
        }
        if let Some(location) = other.location {
            merged = merged.location(location);
        }
        if let Some(location_param) = other.location_param {
            merged = merged.location_param(location_param);
        }
        if let Some(page) = other.page {
            merged = merged.page(page);
        }
        if let Some(per_page) = other.per_page {
            merged = merged.per_page(per_page);
        }
        if let Some(social) = other.social {
            merged = merged.social(social);
        }
        if let Some(staff_picks) = other.staff_picks {
            merged = merged.staff_picks(staff_picks);
        }
        if let Some(starred) = other.starred {
            merged = merged.starred(starred);
        }
        if let Some(sort) = other.sort {
            merged = merged.sort(sort);
        }
        if let Some(recommended) = other.recommended {
            merged = merged.recommended(recommended);
        }
        if let Some(similar_to) = other.similar_to {
            merged = merged.similar_to(similar_to);
        }
        if let Some(term) = other.term {
            merged = merged.term(term);
        }

        merged
    }

    fn update<F: FnOnce(&mut DiscoveryParams<'a>)>(mut self, update: F) -> Self {
        update(&mut self.params);
        self
    }
}

impl<'a> From<DiscoveryParams<'a>> for DiscoveryParamsBuilder<'a> {
    fn from(params: DiscoveryParams<'a>) -> Self {
        Self { params }
    }
}
