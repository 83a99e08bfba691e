use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use royal_catalog::config::ServerConfig;
use royal_catalog::db::establish_connection_pool;
use royal_catalog::repository::DieselRepository;
use royal_catalog::routes::api::api_v1_products;
use royal_catalog::routes::catalog::{show_catalog, show_product};
use royal_catalog::routes::main::{not_found, show_index};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let tera = match Tera::new(&config.templates_glob()) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let assets_dir = config.assets_dir.clone();
    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", assets_dir.as_str()))
            .service(show_index)
            .service(show_catalog)
            .service(show_product)
            .service(api_v1_products)
            .default_service(web::to(not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
