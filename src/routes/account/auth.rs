use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::store::Storage;
use crate::middleware::auth::{jwt_secret, Claims};
use crate::models::user::{NewUser, UserSession};
use crate::services::catalog_service;
use crate::services::validation::is_valid_email;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

pub async fn signup(data: web::Data<Arc<dyn Storage>>, input: web::Json<NewUser>) -> impl Responder {
    let store = data.get_ref().as_ref();
    let mut doc = input.into_inner();

    if doc.username.trim().is_empty() || doc.password.is_empty() {
        return HttpResponse::BadRequest().body("Username and password are required");
    }
    if let Some(email) = &doc.email {
        if !is_valid_email(email) {
            return HttpResponse::BadRequest().body("Invalid email address");
        }
    }

    // The store itself allows duplicate usernames; reject them here so each
    // username maps to one account.
    match catalog_service::user_by_username(store, &doc.username) {
        Ok(Some(_)) => return HttpResponse::Conflict().body("User already exists"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("Failed to check for existing user: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    }

    doc.password = match bcrypt::hash(&doc.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            eprintln!("Failed to hash password: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    };

    match store.create_user(doc) {
        Ok(user) => match generate_token(&user.username, user.id) {
            Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
            Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
        },
        Err(err) => {
            eprintln!("Failed to create user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create user")
        }
    }
}

pub async fn signin(
    data: web::Data<Arc<dyn Storage>>,
    input: web::Json<Credentials>,
) -> impl Responder {
    let store = data.get_ref().as_ref();
    let doc = input.into_inner();

    match catalog_service::user_by_username(store, &doc.username) {
        Ok(Some(user)) => {
            if bcrypt::verify(&doc.password, &user.password).unwrap_or(false) {
                match generate_token(&user.username, user.id) {
                    Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
                    Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
                }
            } else {
                HttpResponse::Unauthorized().body("Invalid credentials")
            }
        }
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            eprintln!("Failed to look up user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to process signin")
        }
    }
}

pub async fn user_session(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<dyn Storage>>,
) -> impl Responder {
    let store = data.get_ref().as_ref();

    match store.user_by_id(claims.user_id) {
        Ok(Some(user)) => HttpResponse::Ok().json(UserSession {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
        }),
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            eprintln!("Failed to fetch user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch user")
        }
    }
}

fn generate_token(username: &str, user_id: u32) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = Claims {
        sub: username.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(24)).timestamp() as usize,
        user_id,
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(jwt_secret().as_ref()))
}
