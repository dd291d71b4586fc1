use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::middleware::auth::Claims;

/*
    GET /api/account/{user_id}/bookings (authenticated, own account only)
*/
pub async fn get_user_bookings(
    data: web::Data<Arc<dyn Storage>>,
    path: web::Path<u32>,
    claims: web::ReqData<Claims>,
) -> impl Responder {
    let user_id = path.into_inner();
    if user_id != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let store = data.get_ref().as_ref();
    match store.bookings_by_user(user_id) {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(err) => {
            eprintln!("Failed to fetch bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch bookings")
        }
    }
}
