use actix_web::{web, App, HttpServer};
use ofc_backend::routes;
use ofc_backend::{AppState, ServerConfig};
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    info!(
        host = %host,
        port,
        ai_think_ms = config.ai_think.as_millis() as u64,
        report_rejections = config.report_rejections,
        "Starting OFC table server"
    );

    let app_state = AppState::start(config);
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
