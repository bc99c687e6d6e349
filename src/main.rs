use actix_web::{App, HttpServer, middleware, web};

use consultorio::config::AppConfig;
use consultorio::security::rate_limit::RateLimiter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env before the logger so RUST_LOG can live there too
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {e}");
    }

    let config = AppConfig::from_env();
    let limiter = web::Data::new(RateLimiter::new(
        config.contact_max_per_window,
        config.contact_window,
    ));

    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{host}:{port}");

    let session_key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(consultorio::session_middleware(session_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(limiter.clone())
            .configure(consultorio::configure_app(static_dir.clone()))
    })
    .bind((host, port))?
    .run()
    .await
}
