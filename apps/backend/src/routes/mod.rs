use actix_web::web;

pub mod health;
pub mod realtime;

/// Register every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Game channel: /ws
    cfg.configure(realtime::configure_routes);
}
