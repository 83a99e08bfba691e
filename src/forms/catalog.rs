use serde::{Deserialize, Serialize};

use crate::domain::filter::ProductFilter;

/// Path of the catalog page that filter links point at.
pub const CATALOG_PATH: &str = "/products";

const BRAND_KEY: &str = "brandId";
const CATEGORY_KEY: &str = "categoryId";
const PURPOSE_KEY: &str = "purposeId";
const SEARCH_KEY: &str = "q";

/// Raw catalog query; repeated keys collect into the vectors.
#[derive(Debug, Default, Deserialize)]
struct RawCatalogQuery {
    #[serde(rename = "brandId", default)]
    brand_id: Vec<String>,
    #[serde(rename = "categoryId", default)]
    category_id: Vec<String>,
    #[serde(rename = "purposeId", default)]
    purpose_id: Vec<String>,
    #[serde(default)]
    q: Vec<String>,
}

/// Catalog filter parameters normalized from a raw query string.
///
/// Every field is either the value exactly as sent or `None`. An empty value
/// counts as missing. Whitespace is kept, so `q=%20` is still a search. A key
/// that is repeated in the query string is treated as an array and dropped,
/// the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogParams {
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub purpose_id: Option<String>,
    pub q: Option<String>,
}

impl CatalogParams {
    /// Parse the raw query string of a catalog request. Never fails.
    pub fn from_query_string(query: &str) -> Self {
        let raw: RawCatalogQuery = match serde_html_form::from_str(query) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!("Ignoring malformed catalog query `{query}`: {err}");
                RawCatalogQuery::default()
            }
        };

        Self {
            brand_id: single_value(raw.brand_id),
            category_id: single_value(raw.category_id),
            purpose_id: single_value(raw.purpose_id),
            q: single_value(raw.q),
        }
    }

    /// Typed predicate equivalent of these parameters.
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter {
            brand_id: self.brand_id.clone(),
            category_id: self.category_id.clone(),
            purpose_id: self.purpose_id.clone(),
            search: self.q.clone(),
        }
    }

    /// Whether any of the brand, category or purpose filters is set.
    pub fn has_dimension_filters(&self) -> bool {
        self.brand_id.is_some() || self.category_id.is_some() || self.purpose_id.is_some()
    }

    /// Dimension selections only; the search term is dropped.
    pub fn dimensions(&self) -> Self {
        Self {
            q: None,
            ..self.clone()
        }
    }

    pub fn with_brand(&self, brand_id: impl Into<String>) -> Self {
        Self {
            brand_id: Some(brand_id.into()),
            ..self.dimensions()
        }
    }

    pub fn with_category(&self, category_id: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id.into()),
            ..self.dimensions()
        }
    }

    pub fn with_purpose(&self, purpose_id: impl Into<String>) -> Self {
        Self {
            purpose_id: Some(purpose_id.into()),
            ..self.dimensions()
        }
    }

    pub fn without_brand(&self) -> Self {
        Self {
            brand_id: None,
            ..self.dimensions()
        }
    }

    pub fn without_category(&self) -> Self {
        Self {
            category_id: None,
            ..self.dimensions()
        }
    }

    pub fn without_purpose(&self) -> Self {
        Self {
            purpose_id: None,
            ..self.dimensions()
        }
    }

    /// Encoded query string, with keys in a fixed order.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<(&str, &str)> = [
            (BRAND_KEY, self.brand_id.as_deref()),
            (CATEGORY_KEY, self.category_id.as_deref()),
            (PURPOSE_KEY, self.purpose_id.as_deref()),
            (SEARCH_KEY, self.q.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect();

        serde_html_form::to_string(&pairs).unwrap_or_default()
    }

    /// Catalog URL carrying these parameters.
    pub fn href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            CATALOG_PATH.to_string()
        } else {
            format!("{CATALOG_PATH}?{query}")
        }
    }
}

fn single_value(values: Vec<String>) -> Option<String> {
    let [value] = values.as_slice() else {
        return None;
    };

    if value.is_empty() {
        None
    } else {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_no_filters() {
        let params = CatalogParams::from_query_string("");
        assert_eq!(params, CatalogParams::default());
        assert!(!params.has_dimension_filters());
        assert_eq!(params.to_filter(), ProductFilter::new());
    }

    #[test]
    fn known_keys_are_extracted_and_decoded() {
        let params = CatalogParams::from_query_string(
            "brandId=loctite&categoryId=adhesives&q=thread+locker",
        );
        assert_eq!(params.brand_id.as_deref(), Some("loctite"));
        assert_eq!(params.category_id.as_deref(), Some("adhesives"));
        assert_eq!(params.purpose_id, None);
        assert_eq!(params.q.as_deref(), Some("thread locker"));
    }

    #[test]
    fn repeated_keys_are_treated_as_unset() {
        let params =
            CatalogParams::from_query_string("brandId=loctite&brandId=crc&purposeId=cleaning");
        assert_eq!(params.brand_id, None);
        assert_eq!(params.purpose_id.as_deref(), Some("cleaning"));
    }

    #[test]
    fn empty_values_are_unset_and_other_values_are_kept_verbatim() {
        let params =
            CatalogParams::from_query_string("brandId=&q=%20%20&categoryId=%20sealants%20");
        assert_eq!(params.brand_id, None);
        assert_eq!(params.q.as_deref(), Some("  "));
        assert_eq!(params.category_id.as_deref(), Some(" sealants "));
    }

    #[test]
    fn whitespace_search_still_counts_as_a_search() {
        let params = CatalogParams::from_query_string("brandId=loctite&q=%20");
        assert_eq!(params.q.as_deref(), Some(" "));
        assert_eq!(params.to_filter().search.as_deref(), Some(" "));

        let params = CatalogParams::from_query_string("q=gel%20");
        assert_eq!(params.q.as_deref(), Some("gel "));
    }

    #[test]
    fn unknown_keys_and_bare_keys_are_ignored() {
        let params = CatalogParams::from_query_string("page=2&brandId&utm_source=mail");
        assert_eq!(params, CatalogParams::default());
    }

    #[test]
    fn links_keep_other_dimensions_and_drop_search() {
        let params = CatalogParams {
            brand_id: Some("loctite".into()),
            category_id: Some("adhesives".into()),
            purpose_id: None,
            q: Some("gel".into()),
        };

        assert_eq!(params.without_brand().href(), "/products?categoryId=adhesives");
        assert_eq!(
            params.with_purpose("bonding").href(),
            "/products?brandId=loctite&categoryId=adhesives&purposeId=bonding"
        );
        assert_eq!(CatalogParams::default().href(), "/products");
    }

    #[test]
    fn query_string_round_trips_special_characters() {
        let params = CatalogParams {
            q: Some("50% & more".into()),
            ..CatalogParams::default()
        };
        let encoded = params.to_query_string();
        assert_eq!(CatalogParams::from_query_string(&encoded), params);
    }
}
