use diesel::prelude::*;

use crate::domain::product::ProductImage as DomainProductImage;

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product_images,
    belongs_to(super::product::Product, foreign_key = product_id)
)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: String,
    pub url: String,
    pub public_id: Option<String>,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage<'a> {
    pub product_id: &'a str,
    pub url: &'a str,
    pub public_id: Option<&'a str>,
    pub position: i32,
}

impl From<ProductImage> for DomainProductImage {
    fn from(value: ProductImage) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            url: value.url,
            public_id: value.public_id,
            position: value.position,
        }
    }
}
