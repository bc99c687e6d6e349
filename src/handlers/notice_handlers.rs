use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::security::csrf;
use crate::security::session::set_flash;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// Placeholder buttons whose real integration does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoNotice {
    WhatsApp,
    Checkout,
}

impl DemoNotice {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "whatsapp" => Some(DemoNotice::WhatsApp),
            "checkout" => Some(DemoNotice::Checkout),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DemoNotice::WhatsApp => "Demo: botón directo a WhatsApp (se configura).",
            DemoNotice::Checkout => "Demo: acá iría a checkout / MercadoPago / TiendaNube.",
        }
    }

    /// Landing section to return to.
    pub fn return_to(&self) -> &'static str {
        match self {
            DemoNotice::WhatsApp => "/#contacto",
            DemoNotice::Checkout => "/#productos",
        }
    }
}

/// POST /avisos/{kind}
pub async fn show(
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let notice = DemoNotice::from_slug(&path.into_inner()).ok_or(AppError::NotFound)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    set_flash(&session, notice.message())?;
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", notice.return_to()))
        .finish())
}
