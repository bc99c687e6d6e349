pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod security;
pub mod templates_structs;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

/// Cookie-backed session carrying theme, CSRF token and toasts.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build()
}

/// All site routes. Shared by `main` and the integration tests.
pub fn configure_app(static_dir: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg
            // Landing page
            .route("/", web::get().to(handlers::landing::index))
            // Procedure detail pages
            .route("/procedimientos", web::get().to(handlers::procedure_handlers::list))
            .route("/procedimientos/{identifier}", web::get().to(handlers::procedure_handlers::detail))
            // Form posts
            .route("/contacto", web::post().to(handlers::contact_handlers::submit))
            .route("/preferencias/tema", web::post().to(handlers::preference_handlers::update_theme))
            .route("/avisos/{kind}", web::post().to(handlers::notice_handlers::show))
            // JSON API
            .service(web::scope("/api/v1").configure(handlers::api_v1::configure))
            // Static files
            .service(actix_files::Files::new("/static", static_dir))
            // Default 404 handler
            .default_service(web::to(handlers::not_found));
    }
}
