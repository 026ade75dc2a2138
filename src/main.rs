use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use edu_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config
            .validate_for_production()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                "%t %s %T \"%r\" xff=%{X-Forwarded-For}i request_id=%{x-request-id}o",
            ))
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
