mod config;
mod services;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server = config::ServerConfig::from_env();
    let gateway = config::GatewayConfig::from_env();
    let payu = config::payu_from_env();

    info!(
        "Server running at http://{}:{} (gateway: {})",
        server.host, server.port, gateway.base_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(gateway.clone()))
            .app_data(web::Data::new(payu.clone()))
            .service(services::payment::configure_routes())
            .service(services::payu::configure_routes())
            // The built frontend plus the animal picture set, so the
            // /zwierzaki/{id}.webp convention resolves from the same origin.
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
