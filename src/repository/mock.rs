use mockall::mock;

use super::{
    BrandReader, BrandWriter, CategoryReader, CategoryWriter, ProductReader, ProductWriter,
    PurposeReader, PurposeWriter, RepositoryResult,
};
use crate::domain::{
    brand::{Brand, NewBrand},
    category::{Category, NewCategory},
    product::{NewProduct, Product, ProductListQuery},
    purpose::{NewPurpose, Purpose},
};

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn upsert_brand(&self, brand: &NewBrand) -> RepositoryResult<Brand>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn upsert_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    }
}

mock! {
    pub PurposeReader {}

    impl PurposeReader for PurposeReader {
        fn list_purposes(&self) -> RepositoryResult<Vec<Purpose>>;
    }
}

mock! {
    pub PurposeWriter {}

    impl PurposeWriter for PurposeWriter {
        fn upsert_purpose(&self, purpose: &NewPurpose) -> RepositoryResult<Purpose>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
        fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn upsert_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
        fn delete_products_except(&self, keep_ids: &[String]) -> RepositoryResult<usize>;
    }
}
