use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    brand::Brand as DomainBrand,
    category::Category as DomainCategory,
    product::{NewProduct as DomainNewProduct, Product as DomainProduct},
    purpose::Purpose as DomainPurpose,
};
use crate::models::{
    brand::Brand, category::Category, product_image::ProductImage, purpose::Purpose,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub priority: i32,
    pub status: String,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub purpose_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Product row joined with its optional brand, category and purpose.
pub type ProductRow = (Product, Option<Brand>, Option<Category>, Option<Purpose>);

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: i32,
    pub priority: i32,
    pub status: &'a str,
    pub brand_id: Option<&'a str>,
    pub category_id: Option<&'a str>,
    pub purpose_id: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl Product {
    pub fn into_domain(
        self,
        brand: Option<Brand>,
        category: Option<Category>,
        purpose: Option<Purpose>,
        images: Vec<ProductImage>,
    ) -> DomainProduct {
        DomainProduct {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            priority: self.priority,
            status: self.status.as_str().into(),
            brand_id: self.brand_id,
            category_id: self.category_id,
            purpose_id: self.purpose_id,
            brand: brand.map(DomainBrand::from),
            category: category.map(DomainCategory::from),
            purpose: purpose.map(DomainPurpose::from),
            images: images.into_iter().map(Into::into).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price: value.price,
            priority: value.priority,
            status: value.status.as_str(),
            brand_id: value.brand_id.as_deref(),
            category_id: value.category_id.as_deref(),
            purpose_id: value.purpose_id.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
