use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::services::catalog_service;
use crate::services::listing_service::{self, HotelFilter};

#[derive(serde::Deserialize)]
pub struct QueryParams {
    category: Option<String>,
}

/*
    /api/hotels[?category=<tag>]
*/
pub async fn get_all(
    data: web::Data<Arc<dyn Storage>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let store = data.get_ref().as_ref();

    let result = match &params.category {
        Some(category) if !category.is_empty() => {
            catalog_service::hotels_by_category(store, category)
        }
        _ => store.all_hotels(),
    };

    match result {
        Ok(hotels) => HttpResponse::Ok().json(hotels),
        Err(err) => {
            eprintln!("Failed to retrieve hotels: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve hotels")
        }
    }
}

/*
    /api/hotels/{id}
*/
pub async fn get_by_id(data: web::Data<Arc<dyn Storage>>, path: web::Path<u32>) -> impl Responder {
    let store = data.get_ref().as_ref();
    let id = path.into_inner();

    match store.hotel_by_id(id) {
        Ok(Some(hotel)) => HttpResponse::Ok().json(hotel),
        Ok(None) => HttpResponse::NotFound().body("Hotel not found"),
        Err(err) => {
            eprintln!("Failed to retrieve hotel: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve hotel")
        }
    }
}

/*
    /api/hotels/search (filter/sort config in the body)
*/
pub async fn search(
    data: web::Data<Arc<dyn Storage>>,
    input: web::Json<HotelFilter>,
) -> impl Responder {
    let store = data.get_ref().as_ref();

    match store.all_hotels() {
        Ok(hotels) => {
            let filtered = listing_service::filter_hotels(&hotels, &input);
            HttpResponse::Ok().json(filtered)
        }
        Err(err) => {
            eprintln!("Failed to search hotels: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to search hotels")
        }
    }
}
