pub mod booking_service;
pub mod catalog_service;
pub mod deal_service;
pub mod listing_service;
pub mod validation;
