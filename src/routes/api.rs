use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::forms::catalog::CatalogParams;
use crate::repository::DieselRepository;
use crate::services::catalog::{self, CatalogResponse};

#[get("/api/v1/products")]
/// Return the catalog resolution as JSON.
///
/// Accepts the same parameters as the catalog page and applies the same
/// grouping decision.
pub async fn api_v1_products(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let params = CatalogParams::from_query_string(req.query_string());

    match catalog::resolve_catalog(repo.get_ref(), params) {
        Ok(resolution) => HttpResponse::Ok().json(CatalogResponse::from(resolution)),
        Err(err) => {
            log::error!("Failed to resolve catalog: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
