use std::env;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripmitra_api::db::seed::seed_catalog;
use tripmitra_api::db::store::{MemoryStore, Storage};
use tripmitra_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let store: Arc<dyn Storage> = Arc::new(MemoryStore::new());
    seed_catalog(store.as_ref()).expect("Failed to seed catalog");
    log::info!("Catalog seeded, binding to {}:{}", host, port);

    let data = web::Data::new(store);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
