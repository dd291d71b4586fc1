use crate::db::store::{Storage, StoreError};
use crate::models::destination::NewDestination;
use crate::models::flight::NewFlight;
use crate::models::hotel::NewHotel;

/// Loads the demo catalog at process start. Destinations, hotels and flights
/// are read-only after this; users and bookings start empty and are created
/// by requests.
pub fn seed_catalog(store: &dyn Storage) -> Result<(), StoreError> {
    for destination in destinations() {
        store.create_destination(destination)?;
    }
    for hotel in hotels() {
        store.create_hotel(hotel)?;
    }
    for flight in flights() {
        store.create_flight(flight)?;
    }
    Ok(())
}

fn destinations() -> Vec<NewDestination> {
    let rows = [
        (
            "Agra",
            "Home to the iconic Taj Mahal, Agra Fort, and more historic wonders",
            "https://images.unsplash.com/photo-1548013146-72479768bada?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.8,
            2345,
            2499,
        ),
        (
            "Jaipur",
            "The Pink City with majestic palaces, vibrant markets, and rich culture",
            "https://images.unsplash.com/photo-1514222134-b57cbb8ce073?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.9,
            3127,
            3299,
        ),
        (
            "Goa",
            "Paradise beaches, vibrant nightlife, and Portuguese colonial charm",
            "https://images.unsplash.com/photo-1580741569354-08feedd159f9?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.5,
            5763,
            3999,
        ),
        (
            "Varanasi",
            "Spiritual city on the banks of Ganges with ancient temples and ghats",
            "https://images.unsplash.com/photo-1567157577867-05ccb1388e66?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.7,
            1896,
            2199,
        ),
        (
            "Udaipur",
            "City of Lakes with stunning palaces, temples, and romantic lakeside views",
            "https://images.unsplash.com/photo-1523544261223-b60f0b3663c6?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.9,
            3450,
            4299,
        ),
        (
            "Kerala",
            "God's Own Country with serene backwaters, lush greenery and ayurvedic retreats",
            "https://images.unsplash.com/photo-1565538810643-b5bdb714032a?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.8,
            4125,
            3599,
        ),
        (
            "Darjeeling",
            "Misty mountains, tea plantations, and the famous toy train experience",
            "https://images.unsplash.com/photo-1544714042-5c0a84c2558e?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.6,
            2132,
            2899,
        ),
        (
            "Amritsar",
            "Home to the Golden Temple, rich Punjabi culture and historic significance",
            "https://images.unsplash.com/photo-1518792528501-352f829886dc?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80",
            4.7,
            1758,
            2499,
        ),
    ];

    rows.into_iter()
        .map(
            |(name, description, image_url, rating, review_count, starting_price)| NewDestination {
                name: name.to_string(),
                description: description.to_string(),
                image_url: image_url.to_string(),
                rating,
                review_count,
                starting_price,
            },
        )
        .collect()
}

fn hotels() -> Vec<NewHotel> {
    let rows = [
        (
            "Taj Lake Palace",
            "An iconic luxury hotel floating in Lake Pichola with royal heritage and breathtaking views.",
            "Udaipur, Rajasthan",
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            9.2,
            24999,
            Some("Popular"),
            vec!["Luxury", "Lake View", "Heritage"],
            vec![
                "Swimming Pool",
                "Spa",
                "Restaurant",
                "Wi-Fi",
                "Room Service",
                "Airport Shuttle",
            ],
        ),
        (
            "The Oberoi Amarvilas",
            "Luxury hotel offering unparalleled views of the Taj Mahal from every room.",
            "Agra, Uttar Pradesh",
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            9.5,
            32500,
            Some("Taj View"),
            vec!["5-Star", "Spa", "Luxury"],
            vec![
                "Swimming Pool",
                "Spa",
                "Restaurant",
                "Wi-Fi",
                "Room Service",
                "Gym",
                "Airport Shuttle",
            ],
        ),
        (
            "The Leela Palace",
            "Opulent 5-star hotel with world-class amenities in the diplomatic enclave of Delhi.",
            "New Delhi",
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            9.0,
            18999,
            Some("20% Off"),
            vec!["Luxury", "Business", "Dining"],
            vec![
                "Swimming Pool",
                "Spa",
                "Restaurant",
                "Wi-Fi",
                "Room Service",
                "Business Center",
                "Gym",
            ],
        ),
        (
            "Taj Mahal Palace",
            "Historic luxury hotel overlooking the Arabian Sea, with iconic architecture and world-class service.",
            "Mumbai, Maharashtra",
            "https://images.unsplash.com/photo-1445991842772-097fea258e7b?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            9.4,
            27999,
            Some("Iconic"),
            vec!["Luxury", "Heritage", "Sea View"],
            vec![
                "Swimming Pool",
                "Spa",
                "Multiple Restaurants",
                "Wi-Fi",
                "Room Service",
                "Gym",
                "Concierge",
            ],
        ),
        (
            "Wildflower Hall",
            "Luxury mountain retreat set in 22 acres of virgin woods of pine and cedar with breathtaking views.",
            "Shimla, Himachal Pradesh",
            "https://images.unsplash.com/photo-1544648138-99b4787576c1?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            9.1,
            21500,
            None,
            vec!["Mountain", "Luxury", "Wellness"],
            vec![
                "Indoor Pool",
                "Spa",
                "Restaurant",
                "Wi-Fi",
                "Room Service",
                "Adventure Activities",
            ],
        ),
        (
            "Kumarakom Lake Resort",
            "Traditional Kerala architecture meets luxury on the serene banks of Vembanad Lake.",
            "Kumarakom, Kerala",
            "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            8.9,
            15999,
            Some("10% Off"),
            vec!["Heritage", "Beachfront", "Wellness"],
            vec![
                "Infinity Pool",
                "Spa",
                "Restaurant",
                "Wi-Fi",
                "Room Service",
                "Boat Tours",
            ],
        ),
    ];

    rows.into_iter()
        .map(
            |(name, description, location, image_url, rating, price_per_night, badge, tags, amenities)| {
                NewHotel {
                    name: name.to_string(),
                    description: description.to_string(),
                    location: location.to_string(),
                    image_url: image_url.to_string(),
                    rating,
                    price_per_night,
                    badge: badge.map(str::to_string),
                    amenities: amenities.into_iter().map(str::to_string).collect(),
                    tags: tags.into_iter().map(str::to_string).collect(),
                }
            },
        )
        .collect()
}

fn flights() -> Vec<NewFlight> {
    let rows = [
        (
            "Air India",
            "https://logo.clearbit.com/airindia.in",
            "On Time",
            ("DEL", "New Delhi"),
            ("BOM", "Mumbai"),
            "1h 55m",
            4249,
            ("09:15", "11:10"),
        ),
        (
            "IndiGo",
            "https://logo.clearbit.com/goindigo.in",
            "On Time",
            ("BLR", "Bengaluru"),
            ("CCU", "Kolkata"),
            "2h 40m",
            5649,
            ("10:30", "13:10"),
        ),
        (
            "SpiceJet",
            "https://logo.clearbit.com/spicejet.com",
            "10m Delay",
            ("HYD", "Hyderabad"),
            ("MAA", "Chennai"),
            "1h 25m",
            3799,
            ("14:15", "15:40"),
        ),
        (
            "Vistara",
            "https://logo.clearbit.com/airvistara.com",
            "On Time",
            ("DEL", "New Delhi"),
            ("BLR", "Bengaluru"),
            "2h 30m",
            6199,
            ("08:00", "10:30"),
        ),
        (
            "Air India Express",
            "https://logo.clearbit.com/airindiaexpress.in",
            "On Time",
            ("COK", "Kochi"),
            ("BOM", "Mumbai"),
            "1h 45m",
            4499,
            ("16:45", "18:30"),
        ),
        (
            "GoAir",
            "https://logo.clearbit.com/goair.in",
            "20m Delay",
            ("BOM", "Mumbai"),
            ("JAI", "Jaipur"),
            "1h 40m",
            3899,
            ("12:15", "13:55"),
        ),
    ];

    rows.into_iter()
        .map(
            |(airline, logo, status, departure, arrival, duration, price, times)| NewFlight {
                airline: airline.to_string(),
                airline_logo: logo.to_string(),
                status: status.to_string(),
                departure_code: departure.0.to_string(),
                departure_city: departure.1.to_string(),
                arrival_code: arrival.0.to_string(),
                arrival_city: arrival.1.to_string(),
                duration: duration.to_string(),
                stops: 0,
                price,
                departure_time: times.0.to_string(),
                arrival_time: times.1.to_string(),
                date: "2023-07-15".to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;

    #[test]
    fn seeds_full_catalog() {
        let store = MemoryStore::new();
        seed_catalog(&store).unwrap();

        assert_eq!(store.all_destinations().unwrap().len(), 8);
        assert_eq!(store.all_hotels().unwrap().len(), 6);
        assert_eq!(store.all_flights().unwrap().len(), 6);
        assert!(store.all_bookings().unwrap().is_empty());

        let first_flight = store.flight_by_id(1).unwrap().unwrap();
        assert_eq!(first_flight.airline, "Air India");
        assert_eq!(first_flight.price, 4249);
    }
}
