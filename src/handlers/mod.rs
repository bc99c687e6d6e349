pub mod api_v1;
pub mod contact_handlers;
pub mod landing;
pub mod notice_handlers;
pub mod preference_handlers;
pub mod procedure_handlers;

use std::net::{IpAddr, Ipv4Addr};

use actix_web::{HttpRequest, HttpResponse};

/// Peer IP used for rate limiting; unspecified when the transport has none.
pub fn client_ip(req: &HttpRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Default 404 handler (must be registered last)
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/errors/404.html"))
}
