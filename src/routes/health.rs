use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::db::store::Storage;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    catalog: CatalogCounts,
}

#[derive(Serialize)]
struct CatalogCounts {
    destinations: usize,
    hotels: usize,
    flights: usize,
}

pub async fn health_check(data: web::Data<Arc<dyn Storage>>) -> impl Responder {
    let store = data.get_ref().as_ref();

    let counts = CatalogCounts {
        destinations: store.all_destinations().map(|d| d.len()).unwrap_or(0),
        hotels: store.all_hotels().map(|h| h.len()).unwrap_or(0),
        flights: store.all_flights().map(|f| f.len()).unwrap_or(0),
    };

    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: counts,
    })
}
