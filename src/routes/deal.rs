use actix_web::{web, HttpResponse, Responder};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::models::flight::Flight;
use crate::models::hotel::Hotel;
use crate::services::deal_service::{self, Deal};

#[derive(Deserialize)]
pub struct QueryParams {
    /// Pins the deal draw to a specific day; defaults to today. Mainly for
    /// reproducible responses in tests.
    date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct HotelDeal {
    #[serde(flatten)]
    hotel: Hotel,
    deal: Deal,
}

#[derive(Serialize)]
struct FlightDeal {
    #[serde(flatten)]
    flight: Flight,
    deal: Deal,
}

#[derive(Serialize)]
struct DealsResponse {
    hotels: Vec<HotelDeal>,
    flights: Vec<FlightDeal>,
}

/*
    /api/deals[?date=YYYY-MM-DD]
*/
pub async fn get_deals(
    data: web::Data<Arc<dyn Storage>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let store = data.get_ref().as_ref();
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let (hotels, flights) = match (store.all_hotels(), store.all_flights()) {
        (Ok(hotels), Ok(flights)) => (hotels, flights),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("Failed to retrieve deals: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to retrieve deals");
        }
    };

    let hotels = hotels
        .into_iter()
        .filter_map(|hotel| {
            deal_service::hotel_deal(hotel.id, date).map(|deal| HotelDeal { hotel, deal })
        })
        .collect();
    let flights = flights
        .into_iter()
        .filter_map(|flight| {
            deal_service::flight_deal(flight.id, date).map(|deal| FlightDeal { flight, deal })
        })
        .collect();

    HttpResponse::Ok().json(DealsResponse { hotels, flights })
}
