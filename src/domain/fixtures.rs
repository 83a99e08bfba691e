//! Sample catalog records shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::product::{Product, ProductImage, ProductStatus};
use crate::domain::purpose::Purpose;

pub fn datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn brand(id: &str, name: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        image_url: None,
        created_at: datetime(),
        updated_at: datetime(),
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        created_at: datetime(),
        updated_at: datetime(),
    }
}

pub fn purpose(id: &str, name: &str) -> Purpose {
    Purpose {
        id: id.to_string(),
        name: name.to_string(),
        created_at: datetime(),
        updated_at: datetime(),
    }
}

pub fn product(id: &str, name: &str, priority: i32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price: 100,
        priority,
        status: ProductStatus::Published,
        brand_id: None,
        category_id: None,
        purpose_id: None,
        brand: None,
        category: None,
        purpose: None,
        images: Vec::new(),
        created_at: datetime(),
        updated_at: datetime(),
    }
}

pub fn image(product_id: &str, id: i32, url: &str) -> ProductImage {
    ProductImage {
        id,
        product_id: product_id.to_string(),
        url: url.to_string(),
        public_id: None,
        position: id,
    }
}

pub fn with_brand(mut product: Product, brand: &Brand) -> Product {
    product.brand_id = Some(brand.id.clone());
    product.brand = Some(brand.clone());
    product
}

pub fn with_category(mut product: Product, category: &Category) -> Product {
    product.category_id = Some(category.id.clone());
    product.category = Some(category.clone());
    product
}

pub fn with_purpose(mut product: Product, purpose: &Purpose) -> Product {
    product.purpose_id = Some(purpose.id.clone());
    product.purpose = Some(purpose.clone());
    product
}
