use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

pub mod api;
pub mod catalog;
pub mod main;

/// Site name shown in the page title and header.
pub const SITE_NAME: &str = "Royal Industrial Supplies";

/// Context shared by every page: site name and the active navigation entry.
pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("site_name", SITE_NAME);
    context.insert("current_page", current_page);
    context
}

/// Render `template` with a `200 OK` status.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template, context, StatusCode::OK)
}

/// Render the not-found page.
pub fn render_not_found(tera: &Tera) -> HttpResponse {
    let context = base_context("");
    render_with_status(tera, "errors/404.html", &context, StatusCode::NOT_FOUND)
}

fn render_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
