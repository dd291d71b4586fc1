//! Converts a validated booking request into a persisted booking record.
//!
//! A booking attempt moves Idle -> Validating -> Rejected, or through price
//! computation to a single store insertion. The insertion is the final step:
//! no rejection path writes anything.

use chrono::Utc;
use thiserror::Error;

use crate::db::store::{Storage, StoreError};
use crate::models::bookings::{Booking, BookingRequest, BookingType, NewBooking};
use crate::services::validation::is_valid_email;

/// No payment gateway exists in this scope; every persisted booking carries
/// this sentinel.
pub const PAYMENT_CONFIRMED: &str = "confirmed";

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0} not found")]
    ItemNotFound(&'static str),
    #[error("check-out date must be after check-in date")]
    InvalidDateRange,
    #[error("a one-way flight booking cannot have an end date")]
    UnexpectedEndDate,
    #[error("number of guests must be at least 1")]
    InvalidGuestCount,
    #[error("{0}")]
    InvalidContact(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn create_booking(
    store: &dyn Storage,
    user_id: u32,
    request: BookingRequest,
) -> Result<Booking, BookingError> {
    validate_contact(&request)?;
    if matches!(request.number_of_guests, Some(0)) {
        return Err(BookingError::InvalidGuestCount);
    }

    // Resolve the catalog item and price the stay. Item existence is checked
    // here rather than by the store, which keeps the store swappable.
    let total_price = match request.booking_type {
        BookingType::Hotel => {
            let hotel = store
                .hotel_by_id(request.item_id)?
                .ok_or(BookingError::ItemNotFound("hotel"))?;
            let end = request.end_date.ok_or(BookingError::InvalidDateRange)?;
            let nights = (end - request.start_date).num_days();
            if nights < 1 {
                return Err(BookingError::InvalidDateRange);
            }
            // Widen before multiplying; a stay long enough to overflow the
            // price field is rejected, not wrapped.
            let total = hotel.price_per_night as u64 * nights as u64;
            u32::try_from(total).map_err(|_| BookingError::InvalidDateRange)?
        }
        BookingType::Flight => {
            let flight = store
                .flight_by_id(request.item_id)?
                .ok_or(BookingError::ItemNotFound("flight"))?;
            if request.end_date.is_some() {
                return Err(BookingError::UnexpectedEndDate);
            }
            // One-time fare; guests do not multiply the price.
            flight.price
        }
    };

    let booking = store.create_booking(NewBooking {
        user_id,
        booking_type: request.booking_type,
        item_id: request.item_id,
        booking_date: Utc::now(),
        start_date: request.start_date,
        end_date: request.end_date,
        number_of_guests: Some(request.number_of_guests.unwrap_or(1)),
        total_price,
        payment_status: PAYMENT_CONFIRMED.to_string(),
        contact_name: request.contact_name,
        contact_email: request.contact_email,
        contact_phone: request.contact_phone,
    })?;

    Ok(booking)
}

fn validate_contact(request: &BookingRequest) -> Result<(), BookingError> {
    if request.contact_name.trim().chars().count() < 3 {
        return Err(BookingError::InvalidContact(
            "contact name must be at least 3 characters",
        ));
    }
    if !is_valid_email(&request.contact_email) {
        return Err(BookingError::InvalidContact(
            "contact email is not a valid address",
        ));
    }
    if request.contact_phone.trim().chars().count() < 10 {
        return Err(BookingError::InvalidContact(
            "contact phone must be at least 10 characters",
        ));
    }
    Ok(())
}
