pub mod procedures;

use actix_web::web;

/// Configure API v1 routes. Read-only, so no CSRF guard is needed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/procedimientos")
            .route("", web::get().to(procedures::list))
            .route("/{identifier}", web::get().to(procedures::read))
    );
}
