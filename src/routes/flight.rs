use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::services::listing_service::{self, FlightFilter};

/*
    /api/flights
*/
pub async fn get_all(data: web::Data<Arc<dyn Storage>>) -> impl Responder {
    let store = data.get_ref().as_ref();

    match store.all_flights() {
        Ok(flights) => HttpResponse::Ok().json(flights),
        Err(err) => {
            eprintln!("Failed to retrieve flights: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve flights")
        }
    }
}

/*
    /api/flights/{id}
*/
pub async fn get_by_id(data: web::Data<Arc<dyn Storage>>, path: web::Path<u32>) -> impl Responder {
    let store = data.get_ref().as_ref();
    let id = path.into_inner();

    match store.flight_by_id(id) {
        Ok(Some(flight)) => HttpResponse::Ok().json(flight),
        Ok(None) => HttpResponse::NotFound().body("Flight not found"),
        Err(err) => {
            eprintln!("Failed to retrieve flight: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve flight")
        }
    }
}

/*
    /api/flights/search (filter/sort config in the body)
*/
pub async fn search(
    data: web::Data<Arc<dyn Storage>>,
    input: web::Json<FlightFilter>,
) -> impl Responder {
    let store = data.get_ref().as_ref();

    match store.all_flights() {
        Ok(flights) => {
            let filtered = listing_service::filter_flights(&flights, &input);
            HttpResponse::Ok().json(filtered)
        }
        Err(err) => {
            eprintln!("Failed to search flights: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to search flights")
        }
    }
}
