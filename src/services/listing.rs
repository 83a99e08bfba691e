//! Presentation grouping for catalog results.

use serde::Serialize;

use crate::domain::product::Product;
use crate::forms::catalog::CatalogParams;

/// How a catalog result set is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Results partitioned into sections keyed by purpose.
    Grouped,
    /// Results shown as one ordered sequence.
    Flat,
}

impl ViewMode {
    /// Grouped when the shopper has drilled into a brand or category and has
    /// narrowed neither by search nor by purpose. Flat otherwise.
    pub fn select(params: &CatalogParams) -> Self {
        let drilled_in = params.brand_id.is_some() || params.category_id.is_some();
        if drilled_in && params.q.is_none() && params.purpose_id.is_none() {
            ViewMode::Grouped
        } else {
            ViewMode::Flat
        }
    }
}

/// Labeled section of the grouped view. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGroup<T> {
    pub label: String,
    pub items: Vec<T>,
}

/// Catalog results in their presentation shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProductListing<T> {
    Flat { items: Vec<T> },
    Grouped { groups: Vec<ProductGroup<T>> },
}

impl ProductListing<Product> {
    /// Arrange already-ordered products according to `mode`.
    pub fn build(mode: ViewMode, products: Vec<Product>) -> Self {
        match mode {
            ViewMode::Flat => ProductListing::Flat { items: products },
            ViewMode::Grouped => ProductListing::Grouped {
                groups: group_by(products, |product| product.purpose_label()),
            },
        }
    }
}

impl<T> ProductListing<T> {
    pub fn view_mode(&self) -> ViewMode {
        match self {
            ProductListing::Flat { .. } => ViewMode::Flat,
            ProductListing::Grouped { .. } => ViewMode::Grouped,
        }
    }

    /// Number of items across all groups.
    pub fn len(&self) -> usize {
        match self {
            ProductListing::Flat { items } => items.len(),
            ProductListing::Grouped { groups } => groups.iter().map(|group| group.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform every item while keeping the shape and order.
    pub fn map<U, F>(self, mut f: F) -> ProductListing<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            ProductListing::Flat { items } => ProductListing::Flat {
                items: items.into_iter().map(&mut f).collect(),
            },
            ProductListing::Grouped { groups } => ProductListing::Grouped {
                groups: groups
                    .into_iter()
                    .map(|group| ProductGroup {
                        label: group.label,
                        items: group.items.into_iter().map(&mut f).collect(),
                    })
                    .collect(),
            },
        }
    }

    /// Concatenate the groups back into one sequence.
    pub fn into_flat(self) -> Vec<T> {
        match self {
            ProductListing::Flat { items } => items,
            ProductListing::Grouped { groups } => {
                groups.into_iter().flat_map(|group| group.items).collect()
            }
        }
    }
}

/// Partition `items` by `key`, keeping groups in first-seen order and items
/// in their input order within each group.
pub fn group_by<T, F>(items: Vec<T>, key: F) -> Vec<ProductGroup<T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: Vec<ProductGroup<T>> = Vec::new();
    for item in items {
        let label = key(&item);
        match groups.iter().position(|group| group.label == label) {
            Some(index) => groups[index].items.push(item),
            None => groups.push(ProductGroup {
                label: label.to_string(),
                items: vec![item],
            }),
        }
    }
    groups
}
