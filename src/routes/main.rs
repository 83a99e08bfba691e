use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::forms::catalog::CATALOG_PATH;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::catalog;

#[get("/")]
pub async fn show_index(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match catalog::load_home_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context("index");
            context.insert("featured", &data.featured);
            context.insert("catalog_href", CATALOG_PATH);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load featured products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(tera: web::Data<Tera>) -> impl Responder {
    render_not_found(&tera)
}
