use crate::discovery::DiscoveryParams;
use std::collections::HashMap;

impl DiscoveryParams<'_> {
    /// Encodes parameters into the query parameters understood by the discovery API. Raw category
    /// and location parameters take precedence over the resolved entities. Iteration order of the
    /// returned map is unspecified.
    pub fn query_params(&self) -> HashMap<&'static str, String> {
        let mut query_params = HashMap::new();

        if let Some(backed) = self.backed {
            query_params.insert("backed", backed.to_string());
        }

        if let Some(category) = self.category {
            query_params.insert("category_id", category.id.to_string());
        }

        if let Some(ref category_param) = self.category_param {
            query_params.insert("category_id", category_param.clone());
        }

        if let Some(location) = self.location {
            query_params.insert("woe_id", location.id.to_string());
        }

        if let Some(ref location_param) = self.location_param {
            query_params.insert("woe_id", location_param.clone());
        }

        if let Some(page) = self.page {
            query_params.insert("page", page.to_string());
        }

        if let Some(per_page) = self.per_page {
            query_params.insert("per_page", per_page.to_string());
        }

        if let Some(recommended) = self.recommended {
            query_params.insert("recommended", recommended.to_string());
        }

        if let Some(similar_to) = self.similar_to {
            query_params.insert("similar_to", similar_to.id.to_string());
        }

        if let Some(starred) = self.starred {
            query_params.insert("starred", starred.to_string());
        }

        if let Some(social) = self.social {
            query_params.insert("social", social.to_string());
        }

        if let Some(sort) = self.sort {
            query_params.insert("sort", sort.as_token().to_string());
        }

        if let Some(staff_picks) = self.staff_picks {
            query_params.insert("staff_picks", staff_picks.to_string());
        }

        if let Some(ref term) = self.term {
            query_params.insert("q", term.clone());
        }

        let first_page = self.page == Some(1);
        if first_page && self.staff_picks == Some(true) {
            query_params.insert("include_potd", "true".to_string());
        }

        if first_page && self.category.is_some() {
            query_params.insert("include_featured", "true".to_string());
        }

        query_params
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        discovery::{DiscoveryParams, DiscoveryParamsBuilder, DiscoverySort},
        models::tests::{mock_category, mock_location, mock_project},
    };
    use insta::assert_debug_snapshot;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn encodes_every_field() {
        let category = mock_category();
        let location = mock_location();
        let project = mock_project();

        let params = DiscoveryParamsBuilder::default()
            .backed(1)
            .category(&category)
            .location(&location)
            .page(3)
            .per_page(12)
            .recommended(true)
            .similar_to(&project)
            .starred(0)
            .social(1)
            .sort(DiscoverySort::MostFunded)
            .staff_picks(false)
            .term("cats")
            .build();

        let query_params = params.query_params().into_iter().collect::<BTreeMap<_, _>>();
        assert_debug_snapshot!(query_params, @r###"
        {
            "backed": "1",
            "category_id": "1",
            "page": "3",
            "per_page": "12",
            "q": "cats",
            "recommended": "true",
            "similar_to": "1234",
            "social": "1",
            "sort": "most_funded",
            "staff_picks": "false",
            "starred": "0",
            "woe_id": "2459115",
        }
        "###);
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        assert!(
            DiscoveryParamsBuilder::default()
                .build()
                .query_params()
                .is_empty()
        );
        assert_eq!(
            DiscoveryParamsBuilder::default()
                .term("cats")
                .build()
                .query_params(),
            HashMap::from([("q", "cats".to_string())])
        );
    }

    #[test]
    fn raw_params_take_precedence() {
        let category = mock_category();
        let location = mock_location();

        let query_params = DiscoveryParamsBuilder::default()
            .category(&category)
            .category_param("games")
            .location(&location)
            .location_param("brooklyn-ny")
            .build()
            .query_params();

        assert_eq!(
            query_params.get("category_id").map(String::as_str),
            Some("games")
        );
        assert_eq!(
            query_params.get("woe_id").map(String::as_str),
            Some("brooklyn-ny")
        );
    }

    #[test]
    fn includes_potd_only_for_first_page_of_staff_picks() {
        let first_page = DiscoveryParams::builder().staff_picks(true).build();
        assert_eq!(
            first_page.query_params().get("include_potd").map(String::as_str),
            Some("true")
        );

        let second_page = first_page.next_page();
        assert_eq!(second_page.query_params().get("include_potd"), None);

        let not_staff_picks = DiscoveryParams::builder().staff_picks(false).build();
        assert_eq!(not_staff_picks.query_params().get("include_potd"), None);

        let no_page = DiscoveryParamsBuilder::default().staff_picks(true).build();
        assert_eq!(no_page.query_params().get("include_potd"), None);
    }

    #[test]
    fn includes_featured_only_for_first_page_of_category() {
        let category = mock_category();

        let first_page = DiscoveryParams::builder().category(&category).build();
        assert_eq!(
            first_page
                .query_params()
                .get("include_featured")
                .map(String::as_str),
            Some("true")
        );
        assert_eq!(
            first_page.next_page().query_params().get("include_featured"),
            None
        );

        let raw_category = DiscoveryParams::builder().category_param("art").build();
        assert_eq!(raw_category.query_params().get("include_featured"), None);
    }
}
