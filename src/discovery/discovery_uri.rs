use crate::discovery::{
    DiscoveryParams, DiscoveryParamsBuilder, DiscoveryPathMatcher, DiscoverySort,
    value_parsers::{parse_boolean, parse_integer},
};
use std::{borrow::Cow, collections::HashMap};
use tracing::debug;
use url::Url;

impl<'a> DiscoveryParams<'a> {
    /// Decodes parameters from the discovery URI on top of the from-scratch defaults.
    pub fn from_url<M: DiscoveryPathMatcher>(url: &Url, paths: &M) -> Self {
        Self::from_url_with_builder(url, paths, DiscoveryParams::builder())
    }

    /// Decodes parameters from the discovery URI on top of the `initial` builder. Only the values
    /// present in the URI replace the values of the builder, missing or malformed values are
    /// ignored.
    pub fn from_url_with_builder<M: DiscoveryPathMatcher>(
        url: &Url,
        paths: &M,
        initial: DiscoveryParamsBuilder<'a>,
    ) -> Self {
        let query = QueryParams::new(url);
        let mut builder = initial;

        if let Some(backed) = parse_integer("backed", query.get("backed")) {
            builder = builder.backed(backed);
        }

        if paths.is_categories_path(url.path()) {
            if let Some(segment) = last_path_segment(url) {
                builder = builder.category_param(segment);
            }
        }

        if let Some(category_param) = query.get("category_id") {
            builder = builder.category_param(category_param);
        }

        if paths.is_places_path(url.path()) {
            if let Some(segment) = last_path_segment(url) {
                builder = builder.location_param(segment);
            }
        }

        if let Some(location_param) = query.get("location_id") {
            builder = builder.location_param(location_param);
        }

        if let Some(page) = parse_integer("page", query.get("page")) {
            builder = builder.page(page);
        }

        if let Some(per_page) = parse_integer("per_page", query.get("per_page")) {
            builder = builder.per_page(per_page);
        }

        if let Some(recommended) = parse_boolean("recommended", query.get("recommended")) {
            builder = builder.recommended(recommended);
        }

        if let Some(social) = parse_integer("social", query.get("social")) {
            builder = builder.social(social);
        }

        if let Some(staff_picks) = parse_boolean("staff_picks", query.get("staff_picks")) {
            builder = builder.staff_picks(staff_picks);
        }

        if let Some(sort) = query.get("sort") {
            match sort.parse::<DiscoverySort>() {
                Ok(sort) => builder = builder.sort(sort),
                Err(err) => debug!(parameter = "sort", "Ignoring sort parameter: {err}"),
            }
        }

        if let Some(starred) = parse_integer("starred", query.get("starred")) {
            builder = builder.starred(starred);
        }

        if let Some(term) = query.get("term") {
            builder = builder.term(term);
        }

        let params = builder.build();
        debug!(
            url = %url,
            params = ?params.log_context(),
            "Decoded discovery parameters."
        );

        params
    }
}

/// Query parameters of the URI, only the first value of the repeated parameters is used.
struct QueryParams<'u> {
    values: HashMap<Cow<'u, str>, Cow<'u, str>>,
}

impl<'u> QueryParams<'u> {
    fn new(url: &'u Url) -> Self {
        let mut values = HashMap::new();
        for (name, value) in url.query_pairs() {
            values.entry(name).or_insert(value);
        }

        Self { values }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|value| value.as_ref())
    }
}

/// Returns the last non-empty, percent-decoded path segment of the URI.
fn last_path_segment(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|segment| !segment.is_empty()).last()?;
    Some(
        urlencoding::decode(segment)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| segment.to_string()),
    )
}
