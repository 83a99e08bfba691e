use serde::Serialize;

use crate::domain::product::{Product, ProductStatus};

/// Statuses eligible for display in the catalog. Fixed by policy.
pub const VISIBLE_STATUSES: [ProductStatus; 2] = [ProductStatus::Published, ProductStatus::Draft];

/// Typed predicate over the product collection.
///
/// Dimension filters compose with AND. The search term matches when it is a
/// case-insensitive substring of the name OR the description. Unset fields
/// match everything, and visibility is always enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductFilter {
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub purpose_id: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    /// Filter that matches the whole visible catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn purpose(mut self, purpose_id: impl Into<String>) -> Self {
        self.purpose_id = Some(purpose_id.into());
        self
    }

    /// Restrict the results to products whose name or description contains `term`.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether the status is part of [`VISIBLE_STATUSES`].
    pub fn is_visible(status: ProductStatus) -> bool {
        VISIBLE_STATUSES.contains(&status)
    }

    /// Evaluate the predicate against a single product.
    ///
    /// Mirrors the SQL the diesel repository builds. Search folds case with
    /// Unicode lower-casing on both sides, like the `unicode_lower` SQL
    /// function registered on every pooled connection.
    pub fn matches(&self, product: &Product) -> bool {
        if !Self::is_visible(product.status) {
            return false;
        }

        let dimensions = [
            (&self.brand_id, &product.brand_id),
            (&self.category_id, &product.category_id),
            (&self.purpose_id, &product.purpose_id),
        ];
        for (wanted, actual) in dimensions {
            if let Some(wanted) = wanted {
                if actual.as_deref() != Some(wanted.as_str()) {
                    return false;
                }
            }
        }

        match self.search.as_deref() {
            Some(term) => {
                contains_ignore_case(&product.name, term)
                    || product
                        .description
                        .as_deref()
                        .is_some_and(|description| contains_ignore_case(description, term))
            }
            None => true,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{
        brand, category, product, purpose, with_brand, with_category, with_purpose,
    };

    fn sample() -> Product {
        let mut item = product("loctite-5699", "Loctite SI 5699 Grey Silicone", 50);
        item.description = Some("Oil resistant gasketing GEL".to_string());
        let item = with_brand(item, &brand("loctite", "Loctite"));
        let item = with_category(item, &category("sealants", "Sealants"));
        with_purpose(item, &purpose("sealing", "Sealing & Gasketing"))
    }

    #[test]
    fn empty_filter_matches_visible_products_only() {
        let filter = ProductFilter::new();
        let mut item = sample();
        assert!(filter.matches(&item));

        item.status = ProductStatus::Draft;
        assert!(filter.matches(&item));

        item.status = ProductStatus::Archived;
        assert!(!filter.matches(&item));
    }

    #[test]
    fn dimension_filters_are_conjunctive() {
        let item = sample();
        assert!(ProductFilter::new().brand("loctite").matches(&item));
        assert!(
            ProductFilter::new()
                .brand("loctite")
                .category("sealants")
                .purpose("sealing")
                .matches(&item)
        );
        assert!(
            !ProductFilter::new()
                .brand("loctite")
                .category("adhesives")
                .matches(&item)
        );
        assert!(!ProductFilter::new().purpose("cleaning").matches(&item));
    }

    #[test]
    fn dimension_filter_rejects_products_without_reference() {
        let item = product("bare", "Bare product", 1);
        assert!(!ProductFilter::new().brand("loctite").matches(&item));
        assert!(ProductFilter::new().matches(&item));
    }

    #[test]
    fn search_checks_name_or_description_case_insensitively() {
        let item = sample();
        assert!(ProductFilter::new().search("silicone").matches(&item));
        assert!(ProductFilter::new().search("gel").matches(&item));
        assert!(ProductFilter::new().search("GASKETING").matches(&item));
        assert!(!ProductFilter::new().search("anaerobic").matches(&item));
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let mut item = sample();
        item.name = "Mastic d'ÉTANCHÉITÉ".to_string();
        item.description = Some("Герметик для фланцев".to_string());
        assert!(ProductFilter::new().search("étanchéité").matches(&item));
        assert!(ProductFilter::new().search("ГЕРМЕТИК").matches(&item));
        assert!(!ProductFilter::new().search("etancheite").matches(&item));
    }

    #[test]
    fn search_without_description_only_checks_name() {
        let mut item = sample();
        item.description = None;
        assert!(!ProductFilter::new().search("gel").matches(&item));
        assert!(ProductFilter::new().search("5699").matches(&item));
    }

    #[test]
    fn search_is_and_combined_with_dimensions() {
        let item = sample();
        assert!(ProductFilter::new().brand("loctite").search("gel").matches(&item));
        assert!(!ProductFilter::new().brand("crc").search("gel").matches(&item));
    }
}
