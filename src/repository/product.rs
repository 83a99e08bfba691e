use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    db::unicode_lower,
    domain::filter::{ProductFilter, VISIBLE_STATUSES},
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    },
    models::product::{NewProduct as DbNewProduct, Product as DbProduct, ProductRow},
    models::product_image::{NewProductImage as DbNewProductImage, ProductImage as DbProductImage},
    repository::{DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult},
};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{brands, categories, products, purposes};

        let mut conn = self.conn()?;
        let ProductListQuery { filter, limit } = query;

        let mut items = products::table
            .left_join(brands::table)
            .left_join(categories::table)
            .left_join(purposes::table)
            .filter(products::status.eq_any(visible_status_values()))
            .into_boxed::<Sqlite>();

        if let Some(brand_id) = filter.brand_id.as_deref() {
            items = items.filter(products::brand_id.eq(brand_id));
        }

        if let Some(category_id) = filter.category_id.as_deref() {
            items = items.filter(products::category_id.eq(category_id));
        }

        if let Some(purpose_id) = filter.purpose_id.as_deref() {
            items = items.filter(products::purpose_id.eq(purpose_id));
        }

        if let Some(term) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
            items = items.filter(
                unicode_lower(products::name.nullable())
                    .like(pattern.clone())
                    .escape('\\')
                    .or(unicode_lower(products::description)
                        .like(pattern)
                        .escape('\\')),
            );
        }

        items = items.order((products::priority.desc(), products::id.asc()));

        if let Some(limit) = limit {
            items = items.limit(limit as i64);
        }

        let rows = items.load::<ProductRow>(&mut conn)?;

        attach_images(&mut conn, rows)
    }

    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<DomainProduct>> {
        let mut conn = self.conn()?;
        let product = find_product(&mut conn, id)?;

        Ok(product.filter(|product| ProductFilter::is_visible(product.status)))
    }
}

impl ProductWriter for DieselRepository {
    fn upsert_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::{product_images, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let row = DbNewProduct::from(new_product);

            diesel::insert_into(products::table)
                .values(&row)
                .on_conflict(products::id)
                .do_update()
                .set(&row)
                .execute(conn)?;

            diesel::delete(
                product_images::table.filter(product_images::product_id.eq(&new_product.id)),
            )
            .execute(conn)?;

            let images: Vec<DbNewProductImage> = new_product
                .images
                .iter()
                .enumerate()
                .map(|(position, image)| DbNewProductImage {
                    product_id: new_product.id.as_str(),
                    url: image.url.as_str(),
                    public_id: image.public_id.as_deref(),
                    position: position as i32,
                })
                .collect();

            if !images.is_empty() {
                diesel::insert_into(product_images::table)
                    .values(&images)
                    .execute(conn)?;
            }

            find_product(conn, &new_product.id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_products_except(&self, keep_ids: &[String]) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // Images go with their product through ON DELETE CASCADE.
        let deleted = diesel::delete(products::table.filter(products::id.ne_all(keep_ids)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}

fn visible_status_values() -> Vec<&'static str> {
    VISIBLE_STATUSES
        .iter()
        .map(|status| status.as_str())
        .collect()
}

/// Escape `LIKE` wildcards so the term is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Load one product regardless of its status.
fn find_product(conn: &mut SqliteConnection, id: &str) -> RepositoryResult<Option<DomainProduct>> {
    use crate::schema::{brands, categories, products, purposes};

    let row = products::table
        .left_join(brands::table)
        .left_join(categories::table)
        .left_join(purposes::table)
        .filter(products::id.eq(id))
        .first::<ProductRow>(conn)
        .optional()?;

    match row {
        Some(row) => Ok(attach_images(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

/// Batch-load images for all rows in one query and assemble domain products
/// in the original row order.
fn attach_images(
    conn: &mut SqliteConnection,
    rows: Vec<ProductRow>,
) -> RepositoryResult<Vec<DomainProduct>> {
    use crate::schema::product_images;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut db_products = Vec::with_capacity(rows.len());
    let mut relations = Vec::with_capacity(rows.len());
    for (product, brand, category, purpose) in rows {
        db_products.push(product);
        relations.push((brand, category, purpose));
    }

    let images = DbProductImage::belonging_to(&db_products)
        .order((product_images::position.asc(), product_images::id.asc()))
        .load::<DbProductImage>(conn)?
        .grouped_by(&db_products);

    let products = db_products
        .into_iter()
        .zip(relations)
        .zip(images)
        .map(|((product, (brand, category, purpose)), images)| {
            product.into_domain(brand, category, purpose, images)
        })
        .collect();

    Ok(products)
}
