//! In-memory repository used to exercise services without a database.

use crate::domain::{
    brand::Brand, category::Category, filter::ProductFilter, product::Product,
    product::ProductListQuery, purpose::Purpose,
};
use crate::repository::{
    BrandReader, CategoryReader, ProductReader, PurposeReader, RepositoryResult,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub purposes: Vec<Purpose>,
    /// Products with their relations already attached.
    pub products: Vec<Product>,
}

impl BrandReader for InMemoryRepository {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        let mut brands = self.brands.clone();
        brands.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(brands)
    }
}

impl CategoryReader for InMemoryRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }
}

impl PurposeReader for InMemoryRepository {
    fn list_purposes(&self) -> RepositoryResult<Vec<Purpose>> {
        let mut purposes = self.purposes.clone();
        purposes.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(purposes)
    }
}

impl ProductReader for InMemoryRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|product| query.filter.matches(product))
            .cloned()
            .collect();
        products.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));
        if let Some(limit) = query.limit {
            products.truncate(limit);
        }
        Ok(products)
    }

    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|product| product.id == id && ProductFilter::is_visible(product.status))
            .cloned())
    }
}
