use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::theme::Theme;
use crate::security::csrf;
use crate::security::session::{get_theme, set_theme};

#[derive(Deserialize)]
pub struct ThemeForm {
    pub csrf_token: String,
    #[serde(default)]
    pub theme: Option<String>,
}

/// POST /preferencias/tema
/// Without a `theme` field the stored preference is toggled.
pub async fn update_theme(
    req: HttpRequest,
    session: Session,
    form: web::Form<ThemeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let theme = match form.theme.as_deref().filter(|t| !t.is_empty()) {
        None => get_theme(&session).toggled(),
        Some(raw) => match Theme::parse(raw) {
            Some(theme) => theme,
            None => return Ok(HttpResponse::BadRequest().body("Invalid theme")),
        },
    };
    set_theme(&session, theme)?;

    let host = req.connection_info().host().to_string();
    let location = req
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .and_then(|referer| same_site_path(referer, &host))
        .unwrap_or_else(|| "/".to_string());

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish())
}

/// Path (with query) of `referer` when it points at `host`; `None` otherwise.
fn same_site_path(referer: &str, host: &str) -> Option<String> {
    let rest = referer
        .strip_prefix("https://")
        .or_else(|| referer.strip_prefix("http://"))?;
    let (authority, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, "/"),
    };
    if !authority.eq_ignore_ascii_case(host) || path.starts_with("//") {
        return None;
    }
    // The fragment never reaches the server; drop it if a client sent one.
    let path = path.split('#').next().unwrap_or("/");
    Some(path.to_string())
}
