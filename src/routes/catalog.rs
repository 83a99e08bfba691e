use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::forms::catalog::CatalogParams;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::{ServiceError, catalog};

/// Catalog listing. Parameters come from the raw query string so repeated
/// keys can be detected and ignored.
#[get("/products")]
pub async fn show_catalog(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = CatalogParams::from_query_string(req.query_string());

    match catalog::load_catalog_page(repo.get_ref(), params) {
        Ok(data) => {
            let mut context = base_context("products");
            context.insert("heading", &data.heading);
            context.insert("params", &data.params);
            context.insert("view_mode", &data.view_mode);
            context.insert("listing", &data.listing);
            context.insert("total", &data.total);
            context.insert("labels", &data.labels);
            context.insert("active_filters", &data.active_filters);
            context.insert("brands", &data.brands);
            context.insert("categories", &data.categories);
            context.insert("purposes", &data.purposes);
            context.insert("clear_href", &data.clear_href);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load catalog: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog::load_product_page(repo.get_ref(), &product_id) {
        Ok(data) => {
            let mut context = base_context("products");
            context.insert("product", &data.card);
            context.insert("image_urls", &data.image_urls);
            context.insert("brand", &data.brand);
            context.insert("category", &data.category);
            context.insert("purpose", &data.purpose);
            render_template(&tera, "products/show.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
