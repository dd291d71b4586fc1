use serde::{Deserialize, Serialize};

/// Hotel ratings use a 0.0-10.0 scale, unlike destinations (0.0-5.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub rating: f32,
    pub price_per_night: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub amenities: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub rating: f32,
    pub price_per_night: u32,
    pub badge: Option<String>,
    pub amenities: Vec<String>,
    pub tags: Vec<String>,
}

impl NewHotel {
    pub fn with_id(self, id: u32) -> Hotel {
        Hotel {
            id,
            name: self.name,
            description: self.description,
            location: self.location,
            image_url: self.image_url,
            rating: self.rating,
            price_per_night: self.price_per_night,
            badge: self.badge,
            amenities: self.amenities,
            tags: self.tags,
        }
    }
}
