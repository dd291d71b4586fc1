pub mod bookings;
pub mod destination;
pub mod flight;
pub mod hotel;
pub mod user;
