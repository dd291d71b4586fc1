//! Derives the displayed subset and order of a listing from a full
//! collection snapshot and a filter/sort configuration. Pure functions, safe
//! to recompute on every configuration change.
//!
//! Filtering is a conjunction of independent predicates: an omitted or
//! default option imposes no constraint. All sorts are stable, so records
//! comparing equal keep their original relative order.

use serde::{Deserialize, Serialize};

use crate::models::destination::Destination;
use crate::models::flight::Flight;
use crate::models::hotel::Hotel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotelSort {
    /// Stored order; no reordering.
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
    Rating,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelFilter {
    /// Substring match against name or location, case-insensitive.
    pub search_text: Option<String>,
    /// Inclusive [min, max] bounds on price per night. min > max is allowed
    /// and simply matches nothing.
    pub price_range: Option<(u32, u32)>,
    /// Required set: a hotel must offer every listed amenity.
    pub amenities: Vec<String>,
    pub min_rating: Option<f32>,
    pub sort_by: HotelSort,
}

pub fn filter_hotels(hotels: &[Hotel], filter: &HotelFilter) -> Vec<Hotel> {
    let mut result: Vec<Hotel> = hotels
        .iter()
        .filter(|hotel| {
            if let Some(query) = &filter.search_text {
                let query = query.to_lowercase();
                if !hotel.name.to_lowercase().contains(&query)
                    && !hotel.location.to_lowercase().contains(&query)
                {
                    return false;
                }
            }
            if let Some((min, max)) = filter.price_range {
                if hotel.price_per_night < min || hotel.price_per_night > max {
                    return false;
                }
            }
            if !filter
                .amenities
                .iter()
                .all(|required| hotel.amenities.iter().any(|a| a == required))
            {
                return false;
            }
            if let Some(floor) = filter.min_rating {
                if hotel.rating < floor {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    match filter.sort_by {
        HotelSort::Popularity => {}
        HotelSort::PriceLow => result.sort_by_key(|h| h.price_per_night),
        HotelSort::PriceHigh => result.sort_by(|a, b| b.price_per_night.cmp(&a.price_per_night)),
        HotelSort::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightSort {
    /// Stored order; no reordering.
    #[default]
    Departure,
    PriceLow,
    PriceHigh,
    Duration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightFilter {
    /// Substring match against departure city or airport code.
    pub from: Option<String>,
    /// Substring match against arrival city or airport code.
    pub to: Option<String>,
    /// Allow-set; empty means no airline filter.
    pub airlines: Vec<String>,
    pub price_range: Option<(u32, u32)>,
    pub sort_by: FlightSort,
}

pub fn filter_flights(flights: &[Flight], filter: &FlightFilter) -> Vec<Flight> {
    let mut result: Vec<Flight> = flights
        .iter()
        .filter(|flight| {
            if let Some(from) = &filter.from {
                let from = from.to_lowercase();
                if !flight.departure_city.to_lowercase().contains(&from)
                    && !flight.departure_code.to_lowercase().contains(&from)
                {
                    return false;
                }
            }
            if let Some(to) = &filter.to {
                let to = to.to_lowercase();
                if !flight.arrival_city.to_lowercase().contains(&to)
                    && !flight.arrival_code.to_lowercase().contains(&to)
                {
                    return false;
                }
            }
            if !filter.airlines.is_empty() && !filter.airlines.contains(&flight.airline) {
                return false;
            }
            if let Some((min, max)) = filter.price_range {
                if flight.price < min || flight.price > max {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    match filter.sort_by {
        FlightSort::Departure => {}
        FlightSort::PriceLow => result.sort_by_key(|f| f.price),
        FlightSort::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
        FlightSort::Duration => {
            result.sort_by_key(|f| duration_minutes(&f.duration).unwrap_or(0))
        }
    }

    result
}

/// Parses the "XhYm" duration format into total minutes. A malformed string
/// is a data-entry error, not a runtime fault: callers fall back to a sort
/// key of 0 rather than aborting the listing.
pub fn duration_minutes(duration: &str) -> Option<u32> {
    let (hours, rest) = duration.split_once('h')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let rest = rest.trim().trim_end_matches('m').trim();
    let minutes: u32 = if rest.is_empty() { 0 } else { rest.parse().ok()? };
    Some(hours * 60 + minutes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    #[default]
    All,
    /// rating >= 4.7
    Popular,
    /// starting price < 3000
    Budget,
    /// starting price >= 3000
    Luxury,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DestinationFilter {
    /// Substring match against name or description.
    pub search_text: Option<String>,
    pub category: DestinationCategory,
}

pub fn filter_destinations(
    destinations: &[Destination],
    filter: &DestinationFilter,
) -> Vec<Destination> {
    destinations
        .iter()
        .filter(|destination| {
            if let Some(query) = &filter.search_text {
                let query = query.to_lowercase();
                if !destination.name.to_lowercase().contains(&query)
                    && !destination.description.to_lowercase().contains(&query)
                {
                    return false;
                }
            }
            match filter.category {
                DestinationCategory::All => true,
                DestinationCategory::Popular => destination.rating >= 4.7,
                DestinationCategory::Budget => destination.starting_price < 3000,
                DestinationCategory::Luxury => destination.starting_price >= 3000,
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: u32, name: &str, location: &str, price: u32, rating: f32) -> Hotel {
        Hotel {
            id,
            name: name.to_string(),
            description: String::new(),
            location: location.to_string(),
            image_url: String::new(),
            rating,
            price_per_night: price,
            badge: None,
            amenities: vec!["Wi-Fi".to_string(), "Spa".to_string()],
            tags: vec![],
        }
    }

    fn flight(id: u32, airline: &str, from: (&str, &str), to: (&str, &str), duration: &str, price: u32) -> Flight {
        Flight {
            id,
            airline: airline.to_string(),
            airline_logo: String::new(),
            status: "On Time".to_string(),
            departure_code: from.0.to_string(),
            departure_city: from.1.to_string(),
            arrival_code: to.0.to_string(),
            arrival_city: to.1.to_string(),
            duration: duration.to_string(),
            stops: 0,
            price,
            departure_time: "09:00".to_string(),
            arrival_time: "11:00".to_string(),
            date: "2023-07-15".to_string(),
        }
    }

    fn destination(id: u32, name: &str, rating: f32, starting_price: u32) -> Destination {
        Destination {
            id,
            name: name.to_string(),
            description: format!("About {}", name),
            image_url: String::new(),
            rating,
            review_count: 100,
            starting_price,
        }
    }

    #[test]
    fn empty_collection_yields_empty_output() {
        assert!(filter_hotels(&[], &HotelFilter::default()).is_empty());
        assert!(filter_flights(&[], &FlightFilter::default()).is_empty());
        assert!(filter_destinations(&[], &DestinationFilter::default()).is_empty());
    }

    #[test]
    fn default_filter_is_identity() {
        let hotels = vec![
            hotel(1, "Taj Lake Palace", "Udaipur", 24999, 9.2),
            hotel(2, "Wildflower Hall", "Shimla", 21500, 9.1),
        ];
        let result = filter_hotels(&hotels, &HotelFilter::default());
        let ids: Vec<u32> = result.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn price_range_and_amenities_are_conjunctive() {
        let mut expensive = hotel(1, "Palace", "Udaipur", 30000, 9.0);
        expensive.amenities = vec!["Wi-Fi".to_string(), "Spa".to_string(), "Gym".to_string()];
        let mut cheap_no_gym = hotel(2, "Lodge", "Shimla", 8000, 8.0);
        cheap_no_gym.amenities = vec!["Wi-Fi".to_string()];
        let mut cheap_with_gym = hotel(3, "Inn", "Goa", 9000, 7.5);
        cheap_with_gym.amenities = vec!["Wi-Fi".to_string(), "Gym".to_string()];

        let filter = HotelFilter {
            price_range: Some((5000, 10000)),
            amenities: vec!["Wi-Fi".to_string(), "Gym".to_string()],
            ..Default::default()
        };
        let result = filter_hotels(&[expensive, cheap_no_gym, cheap_with_gym], &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
        for h in &result {
            assert!(h.price_per_night >= 5000 && h.price_per_night <= 10000);
            assert!(filter
                .amenities
                .iter()
                .all(|a| h.amenities.iter().any(|x| x == a)));
        }
    }

    #[test]
    fn price_sort_is_stable_on_ties() {
        let hotels = vec![
            hotel(1, "First", "Goa", 5000, 8.0),
            hotel(2, "Second", "Goa", 5000, 9.0),
            hotel(3, "Cheapest", "Goa", 4000, 7.0),
        ];
        let filter = HotelFilter {
            sort_by: HotelSort::PriceLow,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_hotels(&hotels, &filter).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn rating_sort_is_descending() {
        let hotels = vec![
            hotel(1, "Good", "Goa", 5000, 8.0),
            hotel(2, "Best", "Goa", 5000, 9.5),
            hotel(3, "Fine", "Goa", 5000, 7.0),
        ];
        let filter = HotelFilter {
            sort_by: HotelSort::Rating,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_hotels(&hotels, &filter).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let hotels = vec![hotel(1, "Palace", "Udaipur", 20000, 9.0)];
        let filter = HotelFilter {
            price_range: Some((30000, 10000)),
            ..Default::default()
        };
        assert!(filter_hotels(&hotels, &filter).is_empty());
    }

    #[test]
    fn search_matches_name_or_location() {
        let hotels = vec![
            hotel(1, "Taj Lake Palace", "Udaipur, Rajasthan", 24999, 9.2),
            hotel(2, "Kumarakom Lake Resort", "Kumarakom, Kerala", 15999, 8.9),
        ];
        let filter = HotelFilter {
            search_text: Some("kerala".to_string()),
            ..Default::default()
        };
        let result = filter_hotels(&hotels, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn flight_from_matches_city_or_code() {
        let flights = vec![
            flight(1, "Air India", ("DEL", "New Delhi"), ("BOM", "Mumbai"), "2h 5m", 4249),
            flight(2, "IndiGo", ("BLR", "Bengaluru"), ("CCU", "Kolkata"), "2h 40m", 5649),
        ];
        let by_code = FlightFilter {
            from: Some("del".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_flights(&flights, &by_code)[0].id, 1);

        let by_city = FlightFilter {
            from: Some("bengal".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_flights(&flights, &by_city)[0].id, 2);
    }

    #[test]
    fn empty_airline_set_means_no_filter() {
        let flights = vec![
            flight(1, "Air India", ("DEL", "New Delhi"), ("BOM", "Mumbai"), "2h 5m", 4249),
            flight(2, "IndiGo", ("BLR", "Bengaluru"), ("CCU", "Kolkata"), "2h 40m", 5649),
        ];
        assert_eq!(filter_flights(&flights, &FlightFilter::default()).len(), 2);

        let only_indigo = FlightFilter {
            airlines: vec!["IndiGo".to_string()],
            ..Default::default()
        };
        let result = filter_flights(&flights, &only_indigo);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].airline, "IndiGo");
    }

    #[test]
    fn duration_sort_parses_hours_and_minutes() {
        let flights = vec![
            flight(1, "Air India", ("DEL", "New Delhi"), ("BOM", "Mumbai"), "2h 5m", 4249),
            flight(2, "SpiceJet", ("HYD", "Hyderabad"), ("MAA", "Chennai"), "1h 25m", 3799),
            flight(3, "Vistara", ("DEL", "New Delhi"), ("BLR", "Bengaluru"), "10h 0m", 6199),
        ];
        let filter = FlightFilter {
            sort_by: FlightSort::Duration,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_flights(&flights, &filter).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn malformed_duration_sorts_first_instead_of_failing() {
        let flights = vec![
            flight(1, "Air India", ("DEL", "New Delhi"), ("BOM", "Mumbai"), "1h 55m", 4249),
            flight(2, "Mystery Air", ("XXX", "Nowhere"), ("YYY", "Elsewhere"), "soon", 1000),
        ];
        let filter = FlightFilter {
            sort_by: FlightSort::Duration,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_flights(&flights, &filter).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn duration_minutes_handles_expected_and_broken_inputs() {
        assert_eq!(duration_minutes("1h 55m"), Some(115));
        assert_eq!(duration_minutes("2h40m"), Some(160));
        assert_eq!(duration_minutes("3h"), Some(180));
        assert_eq!(duration_minutes("ninety minutes"), None);
        assert_eq!(duration_minutes(""), None);
    }

    #[test]
    fn destination_categories_split_on_price_and_rating() {
        let destinations = vec![
            destination(1, "Agra", 4.8, 2499),
            destination(2, "Goa", 4.5, 3999),
            destination(3, "Varanasi", 4.7, 2199),
        ];

        let popular = DestinationFilter {
            category: DestinationCategory::Popular,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_destinations(&destinations, &popular).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let budget = DestinationFilter {
            category: DestinationCategory::Budget,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_destinations(&destinations, &budget).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let luxury = DestinationFilter {
            category: DestinationCategory::Luxury,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_destinations(&destinations, &luxury).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn destination_search_and_category_combine_with_and() {
        let destinations = vec![
            destination(1, "Agra", 4.8, 2499),
            destination(2, "Amritsar", 4.7, 2499),
        ];
        let filter = DestinationFilter {
            search_text: Some("agra".to_string()),
            category: DestinationCategory::Popular,
        };
        let result = filter_destinations(&destinations, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Agra");
    }
}
