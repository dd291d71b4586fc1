use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub rating: f32,
    pub review_count: u32,
    pub starting_price: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub rating: f32,
    pub review_count: u32,
    pub starting_price: u32,
}

impl NewDestination {
    pub fn with_id(self, id: u32) -> Destination {
        Destination {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            rating: self.rating,
            review_count: self.review_count,
            starting_price: self.starting_price,
        }
    }
}
