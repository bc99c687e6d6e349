//! Shared test infrastructure for HTTP-level tests.
//!
//! - `init_app!()` builds the same app as `main`, with a fresh session key
//! - `session_cookie()` / `csrf_token()` pull session state out of responses
//! - `form_post()` builds an urlencoded POST carrying the session cookie

#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use regex::Regex;

/// Build the app under test. Optionally takes a custom `RateLimiter`.
#[allow(unused_macros)]
macro_rules! init_app {
    () => {
        init_app!(consultorio::security::rate_limit::RateLimiter::default())
    };
    ($limiter:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(consultorio::session_middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::new($limiter))
                .configure(consultorio::configure_app("./static".to_string())),
        )
        .await
    };
}

/// GET `/` to start a session; yields `(cookie, csrf_token)`.
#[allow(unused_macros)]
macro_rules! open_session {
    ($app:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::get().uri("/").to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let cookie = common::session_cookie(&resp).expect("first visit should set a session cookie");
        let html = common::body_string(resp).await;
        (cookie, common::csrf_token(&html))
    }};
}

pub const SESSION_COOKIE: &str = "id";

/// Session cookie set by this response, if the session changed.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// First CSRF token rendered into a form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should contain a csrf token")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn form_post(uri: &str, cookie: &Cookie<'static>, fields: &[(&str, &str)]) -> test::TestRequest {
    let payload = serde_urlencoded::to_string(fields).expect("encode form");
    test::TestRequest::post()
        .uri(uri)
        .cookie(cookie.clone())
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(payload)
}
