use actix_web::web;

pub mod health;
pub mod players;

/// Configure application routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Player routes: /players/**
    cfg.service(web::scope("/players").configure(players::configure_routes));

    // Health check route: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));
}
