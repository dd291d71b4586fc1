use std::collections::BTreeMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::models::bookings::{Booking, NewBooking};
use crate::models::destination::{Destination, NewDestination};
use crate::models::flight::{Flight, NewFlight};
use crate::models::hotel::{Hotel, NewHotel};
use crate::models::user::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding a table lock. Scoped to the one
    /// request that hit it; callers should surface a retryable failure.
    #[error("storage is unavailable")]
    Poisoned,
}

/// Keyed storage per entity type with auto-incrementing id assignment.
///
/// Handlers and services depend on this trait, not on `MemoryStore`, so the
/// backing store can be swapped without touching callers. Creation is the
/// only mutation: nothing is ever updated or deleted. Uniqueness beyond the
/// id (e.g. usernames) is deliberately not enforced at this layer.
pub trait Storage: Send + Sync {
    fn create_user(&self, new: NewUser) -> Result<User, StoreError>;
    fn user_by_id(&self, id: u32) -> Result<Option<User>, StoreError>;
    fn all_users(&self) -> Result<Vec<User>, StoreError>;

    fn create_destination(&self, new: NewDestination) -> Result<Destination, StoreError>;
    fn destination_by_id(&self, id: u32) -> Result<Option<Destination>, StoreError>;
    fn all_destinations(&self) -> Result<Vec<Destination>, StoreError>;

    fn create_hotel(&self, new: NewHotel) -> Result<Hotel, StoreError>;
    fn hotel_by_id(&self, id: u32) -> Result<Option<Hotel>, StoreError>;
    fn all_hotels(&self) -> Result<Vec<Hotel>, StoreError>;

    fn create_flight(&self, new: NewFlight) -> Result<Flight, StoreError>;
    fn flight_by_id(&self, id: u32) -> Result<Option<Flight>, StoreError>;
    fn all_flights(&self) -> Result<Vec<Flight>, StoreError>;

    fn create_booking(&self, new: NewBooking) -> Result<Booking, StoreError>;
    fn booking_by_id(&self, id: u32) -> Result<Option<Booking>, StoreError>;
    fn bookings_by_user(&self, user_id: u32) -> Result<Vec<Booking>, StoreError>;
    fn all_bookings(&self) -> Result<Vec<Booking>, StoreError>;
}

/// One entity collection: a BTreeMap keyed by id (so iteration follows
/// insertion order, ids being monotonic) plus the id counter, both behind a
/// single lock so an id is never handed out twice.
struct Table<T> {
    inner: RwLock<TableInner<T>>,
}

struct TableInner<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn insert(&self, build: impl FnOnce(u32) -> T) -> Result<T, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = inner.next_id;
        inner.next_id += 1;
        let row = build(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    fn get(&self, id: u32) -> Result<Option<T>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<T>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.values().cloned().collect())
    }
}

/// In-memory `Storage` for the reference deployment and for tests.
pub struct MemoryStore {
    users: Table<User>,
    destinations: Table<Destination>,
    hotels: Table<Hotel>,
    flights: Table<Flight>,
    bookings: Table<Booking>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            destinations: Table::new(),
            hotels: Table::new(),
            flights: Table::new(),
            bookings: Table::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStore {
    fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        self.users.insert(|id| new.with_id(id))
    }

    fn user_by_id(&self, id: u32) -> Result<Option<User>, StoreError> {
        self.users.get(id)
    }

    fn all_users(&self) -> Result<Vec<User>, StoreError> {
        self.users.all()
    }

    fn create_destination(&self, new: NewDestination) -> Result<Destination, StoreError> {
        self.destinations.insert(|id| new.with_id(id))
    }

    fn destination_by_id(&self, id: u32) -> Result<Option<Destination>, StoreError> {
        self.destinations.get(id)
    }

    fn all_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        self.destinations.all()
    }

    fn create_hotel(&self, new: NewHotel) -> Result<Hotel, StoreError> {
        self.hotels.insert(|id| new.with_id(id))
    }

    fn hotel_by_id(&self, id: u32) -> Result<Option<Hotel>, StoreError> {
        self.hotels.get(id)
    }

    fn all_hotels(&self) -> Result<Vec<Hotel>, StoreError> {
        self.hotels.all()
    }

    fn create_flight(&self, new: NewFlight) -> Result<Flight, StoreError> {
        self.flights.insert(|id| new.with_id(id))
    }

    fn flight_by_id(&self, id: u32) -> Result<Option<Flight>, StoreError> {
        self.flights.get(id)
    }

    fn all_flights(&self) -> Result<Vec<Flight>, StoreError> {
        self.flights.all()
    }

    fn create_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        self.bookings.insert(|id| new.with_id(id))
    }

    fn booking_by_id(&self, id: u32) -> Result<Option<Booking>, StoreError> {
        self.bookings.get(id)
    }

    fn bookings_by_user(&self, user_id: u32) -> Result<Vec<Booking>, StoreError> {
        let all = self.bookings.all()?;
        Ok(all.into_iter().filter(|b| b.user_id == user_id).collect())
    }

    fn all_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        self.bookings.all()
    }
}
