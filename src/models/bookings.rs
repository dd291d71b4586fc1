use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Hotel,
    Flight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u32,
    pub user_id: u32,
    pub booking_type: BookingType,
    /// Hotel id or flight id depending on `booking_type`.
    pub item_id: u32,
    pub booking_date: DateTime<Utc>,
    pub start_date: NaiveDate,
    /// Checkout date for hotel stays; always None for one-way flights.
    pub end_date: Option<NaiveDate>,
    pub number_of_guests: Option<u32>,
    pub total_price: u32,
    pub payment_status: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: u32,
    pub booking_type: BookingType,
    pub item_id: u32,
    pub booking_date: DateTime<Utc>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub number_of_guests: Option<u32>,
    pub total_price: u32,
    pub payment_status: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl NewBooking {
    pub fn with_id(self, id: u32) -> Booking {
        Booking {
            id,
            user_id: self.user_id,
            booking_type: self.booking_type,
            item_id: self.item_id,
            booking_date: self.booking_date,
            start_date: self.start_date,
            end_date: self.end_date,
            number_of_guests: self.number_of_guests,
            total_price: self.total_price,
            payment_status: self.payment_status,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
        }
    }
}

/// Body of `POST /api/bookings`. The requesting user comes from the auth
/// token, and the total price is computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub booking_type: BookingType,
    pub item_id: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub number_of_guests: Option<u32>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}
