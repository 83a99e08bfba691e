use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::filter::ProductFilter;
use crate::domain::purpose::Purpose;

/// Label shown for products that have no purpose assigned.
pub const GENERAL_PURPOSE_LABEL: &str = "General";
/// Label shown for products that have no category assigned.
pub const GENERAL_CATEGORY_LABEL: &str = "General Supply";

/// Lifecycle state of a product.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Product is live in the catalog.
    Published,
    /// Product is still being prepared but already listed.
    Draft,
    /// Product has been retired and is hidden from the catalog.
    Archived,
}

impl ProductStatus {
    /// Value stored in the `products.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Published => "PUBLISHED",
            ProductStatus::Draft => "DRAFT",
            ProductStatus::Archived => "ARCHIVED",
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl From<&str> for ProductStatus {
    /// Unknown values map to [`ProductStatus::Archived`] so that they never
    /// leak into the visible catalog.
    fn from(value: &str) -> Self {
        match value {
            "PUBLISHED" => ProductStatus::Published,
            "DRAFT" => ProductStatus::Draft,
            _ => ProductStatus::Archived,
        }
    }
}

/// Image attached to a product, ordered by `position`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: String,
    pub url: String,
    pub public_id: Option<String>,
    pub position: i32,
}

/// Domain representation of a catalog product together with its relations.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Slug identifier of the product.
    pub id: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// List price in whole currency units.
    pub price: i32,
    /// Ordering weight; higher values are listed first.
    pub priority: i32,
    /// Current lifecycle status.
    pub status: ProductStatus,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub purpose_id: Option<String>,
    /// Resolved brand, if `brand_id` is set.
    pub brand: Option<Brand>,
    /// Resolved category, if `category_id` is set.
    pub category: Option<Category>,
    /// Resolved purpose, if `purpose_id` is set.
    pub purpose: Option<Purpose>,
    /// Images in storage order; the first one is the thumbnail.
    pub images: Vec<ProductImage>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Representative image used on product cards.
    pub fn thumbnail(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Group heading for this product in the grouped catalog view.
    pub fn purpose_label(&self) -> &str {
        self.purpose
            .as_ref()
            .map(|purpose| purpose.name.as_str())
            .unwrap_or(GENERAL_PURPOSE_LABEL)
    }

    /// Category caption shown on product cards.
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .unwrap_or(GENERAL_CATEGORY_LABEL)
    }
}

/// Image payload attached to a [`NewProduct`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductImage {
    pub url: String,
    pub public_id: Option<String>,
}

impl NewProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: None,
        }
    }

    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }
}

/// Payload used to insert or refresh a product and its images.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub priority: i32,
    pub status: ProductStatus,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub purpose_id: Option<String>,
    /// Replaces the stored image set, in this order.
    pub images: Vec<NewProductImage>,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price: 0,
            priority: 0,
            status: ProductStatus::default(),
            brand_id: None,
            category_id: None,
            purpose_id: None,
            images: Vec::new(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_brand_id(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_purpose_id(mut self, purpose_id: impl Into<String>) -> Self {
        self.purpose_id = Some(purpose_id.into());
        self
    }

    /// Append an image after the ones already attached.
    pub fn with_image(mut self, image: NewProductImage) -> Self {
        self.images.push(image);
        self
    }
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Predicate applied to the product collection.
    pub filter: ProductFilter,
    /// Optional cap on the number of returned products.
    pub limit: Option<usize>,
}

impl ProductListQuery {
    /// Construct a query that lists every product matching `filter`.
    pub fn new(filter: ProductFilter) -> Self {
        Self {
            filter,
            limit: None,
        }
    }

    /// Return at most `limit` products.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
