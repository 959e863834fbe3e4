//! HTTP handlers and route configuration.

mod auth;
mod guests;
mod health;
mod movies;
mod posts;
mod reservations;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Resource CRUD routes
            .service(
                web::scope("/guests")
                    .route("", web::get().to(guests::list))
                    .route("", web::post().to(guests::create))
                    .route("/{id}", web::get().to(guests::retrieve))
                    .route("/{id}", web::put().to(guests::update))
                    .route("/{id}", web::delete().to(guests::delete)),
            )
            .service(
                web::scope("/movies")
                    .route("", web::get().to(movies::list))
                    .route("", web::post().to(movies::create))
                    .route("/{id}", web::get().to(movies::retrieve))
                    .route("/{id}", web::put().to(movies::update))
                    .route("/{id}", web::delete().to(movies::delete)),
            )
            .service(
                web::scope("/reservations")
                    .route("", web::get().to(reservations::list))
                    .route("", web::post().to(reservations::create))
                    .route("/{id}", web::get().to(reservations::retrieve))
                    .route("/{id}", web::put().to(reservations::update))
                    .route("/{id}", web::delete().to(reservations::delete)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::retrieve))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Composite cinema operations
            .route("/findmovie", web::get().to(movies::find_movie))
            .route("/new_reservation", web::post().to(reservations::new_reservation)),
    );
}
