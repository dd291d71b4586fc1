use actix_web::web;

use crate::middleware;

pub mod account;
pub mod booking;
pub mod deal;
pub mod destination;
pub mod flight;
pub mod health;
pub mod hotel;

/// Full route tree, shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(account::auth::signup))
                    .route("/signin", web::post().to(account::auth::signin))
                    .service(
                        web::scope("")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route("/session", web::get().to(account::auth::user_session)),
                    ),
            )
            .service(
                web::scope("/destinations")
                    .route("", web::get().to(destination::get_all))
                    .route("/search", web::post().to(destination::search))
                    .route("/{id}", web::get().to(destination::get_by_id)),
            )
            .service(
                web::scope("/hotels")
                    .route("", web::get().to(hotel::get_all))
                    .route("/search", web::post().to(hotel::search))
                    .route("/{id}", web::get().to(hotel::get_by_id)),
            )
            .service(
                web::scope("/flights")
                    .route("", web::get().to(flight::get_all))
                    .route("/search", web::post().to(flight::search))
                    .route("/{id}", web::get().to(flight::get_by_id)),
            )
            .route("/deals", web::get().to(deal::get_deals))
            .service(
                web::scope("/bookings")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("", web::post().to(booking::create))
                    .route("/{id}", web::get().to(booking::get_by_id)),
            )
            .service(
                web::scope("/account")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route(
                        "/{user_id}/bookings",
                        web::get().to(account::bookings::get_user_bookings),
                    ),
            ),
    );
}
