#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

use actix_web::{middleware::Logger, web, App, HttpServer};
use auth_relay::{auth_callback, health, RelaySettings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from Settings.toml and environment variables
    // This also loads .env file and initializes the logger
    let settings = RelaySettings::load()
        .map_err(|e| std::io::Error::other(format!("Failed to load settings: {e}")))?;

    let bind_address = settings.get_bind_address();
    print_startup_info(&bind_address, &settings);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(settings.clone()))
            .wrap(Logger::default())
            .configure(configure_services)
    })
    .bind(&bind_address)?
    .run()
    .await
}

fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg
        // Upstream identity provider callback
        .route("/auth/callback", web::get().to(auth_callback))
        // Health endpoint
        .route("/ping", web::get().to(health));
}

fn print_startup_info(bind_address: &str, settings: &RelaySettings) {
    println!("Starting auth-relay on http://{bind_address}");
    println!();
    println!("Endpoints:");
    println!("  GET  /auth/callback - Upstream authentication callback");
    println!("  GET  /ping          - Health check");
    println!();
    println!("Client web error callback:");
    println!("  {}", settings.callbacks.client_web_error_callback);
}
