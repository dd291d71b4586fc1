use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    pub airline_logo: String,
    /// Operational free text, e.g. "On Time" or "10m Delay".
    pub status: String,
    pub departure_code: String,
    pub departure_city: String,
    pub arrival_code: String,
    pub arrival_city: String,
    /// Formatted "XhYm"; parsed into minutes only for duration sorting.
    pub duration: String,
    pub stops: u32,
    pub price: u32,
    pub departure_time: String,
    pub arrival_time: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub airline: String,
    pub airline_logo: String,
    pub status: String,
    pub departure_code: String,
    pub departure_city: String,
    pub arrival_code: String,
    pub arrival_city: String,
    pub duration: String,
    pub stops: u32,
    pub price: u32,
    pub departure_time: String,
    pub arrival_time: String,
    pub date: String,
}

impl NewFlight {
    pub fn with_id(self, id: u32) -> Flight {
        Flight {
            id,
            airline: self.airline,
            airline_logo: self.airline_logo,
            status: self.status,
            departure_code: self.departure_code,
            departure_city: self.departure_city,
            arrival_code: self.arrival_code,
            arrival_city: self.arrival_city,
            duration: self.duration,
            stops: self.stops,
            price: self.price,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            date: self.date,
        }
    }
}
