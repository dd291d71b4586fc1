use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App, Error};
use serde_json::json;
use std::sync::Arc;

use tripmitra_api::db::seed::seed_catalog;
use tripmitra_api::db::store::{MemoryStore, Storage};
use tripmitra_api::routes;

pub struct TestApp {
    pub store: Arc<dyn Storage>,
}

impl TestApp {
    /// Fresh store seeded with the demo catalog; users and bookings empty.
    pub fn new() -> Self {
        let store: Arc<dyn Storage> = Arc::new(MemoryStore::new());
        seed_catalog(store.as_ref()).expect("Failed to seed catalog");
        Self { store }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(routes::configure)
    }
}

/// Creates an account and returns its bearer token.
pub async fn signup_user<S, B>(app: &S, username: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "username": username,
            "password": "password123",
            "fullName": "Test Traveler",
            "email": format!("{}@example.com", username),
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "signup failed: {}", resp.status());

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["authToken"]
        .as_str()
        .expect("signup response has no authToken")
        .to_string()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
