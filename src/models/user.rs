use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    // Always a bcrypt hash; never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl NewUser {
    pub fn with_id(self, id: u32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// What `/api/auth/session` returns; deliberately excludes the password hash.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: u32,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}
