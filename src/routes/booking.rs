use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::middleware::auth::Claims;
use crate::models::bookings::BookingRequest;
use crate::services::booking_service::{self, BookingError};

/*
    POST /api/bookings (authenticated)
*/
pub async fn create(
    data: web::Data<Arc<dyn Storage>>,
    input: web::Json<BookingRequest>,
    claims: web::ReqData<Claims>,
) -> impl Responder {
    let store = data.get_ref().as_ref();

    match booking_service::create_booking(store, claims.user_id, input.into_inner()) {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(err) => booking_error_response(err),
    }
}

/*
    GET /api/bookings/{id} (authenticated, owner only)
*/
pub async fn get_by_id(
    data: web::Data<Arc<dyn Storage>>,
    path: web::Path<u32>,
    claims: web::ReqData<Claims>,
) -> impl Responder {
    let store = data.get_ref().as_ref();
    let id = path.into_inner();

    match store.booking_by_id(id) {
        Ok(Some(booking)) if booking.user_id == claims.user_id => {
            HttpResponse::Ok().json(booking)
        }
        Ok(Some(_)) => HttpResponse::Forbidden().body("Forbidden"),
        Ok(None) => HttpResponse::NotFound().body("Booking not found"),
        Err(err) => {
            eprintln!("Failed to fetch booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch booking")
        }
    }
}

fn booking_error_response(err: BookingError) -> HttpResponse {
    match &err {
        BookingError::ItemNotFound(_) => HttpResponse::NotFound().body(err.to_string()),
        BookingError::Store(store_err) => {
            eprintln!("Failed to create booking: {:?}", store_err);
            HttpResponse::InternalServerError().body("Failed to create booking")
        }
        _ => HttpResponse::BadRequest().body(err.to_string()),
    }
}
