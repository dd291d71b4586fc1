use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::services::listing_service::{self, DestinationFilter};

/*
    /api/destinations
*/
pub async fn get_all(data: web::Data<Arc<dyn Storage>>) -> impl Responder {
    let store = data.get_ref().as_ref();

    match store.all_destinations() {
        Ok(destinations) => HttpResponse::Ok().json(destinations),
        Err(err) => {
            eprintln!("Failed to retrieve destinations: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve destinations")
        }
    }
}

/*
    /api/destinations/{id}
*/
pub async fn get_by_id(
    data: web::Data<Arc<dyn Storage>>,
    path: web::Path<u32>,
) -> impl Responder {
    let store = data.get_ref().as_ref();
    let id = path.into_inner();

    match store.destination_by_id(id) {
        Ok(Some(destination)) => HttpResponse::Ok().json(destination),
        Ok(None) => HttpResponse::NotFound().body("Destination not found"),
        Err(err) => {
            eprintln!("Failed to retrieve destination: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve destination")
        }
    }
}

/*
    /api/destinations/search (filter/sort config in the body)
*/
pub async fn search(
    data: web::Data<Arc<dyn Storage>>,
    input: web::Json<DestinationFilter>,
) -> impl Responder {
    let store = data.get_ref().as_ref();

    match store.all_destinations() {
        Ok(destinations) => {
            let filtered = listing_service::filter_destinations(&destinations, &input);
            HttpResponse::Ok().json(filtered)
        }
        Err(err) => {
            eprintln!("Failed to search destinations: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to search destinations")
        }
    }
}
