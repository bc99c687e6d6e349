use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::errors::{AppError, render, render_with_status};
use crate::handlers::client_ip;
use crate::security::{csrf, rate_limit::RateLimiter, session::set_flash, validate};
use crate::templates_structs::{ContactDraft, LandingTemplate, PageContext};

pub const NOMBRE_MAX: usize = 100;
pub const CONTACTO_MAX: usize = 200;
pub const MENSAJE_MAX: usize = 2000;

pub const SENT_MESSAGE: &str = "Enviado (demo) ✅ — luego lo conectamos a un envío real.";
pub const RATE_LIMITED_MESSAGE: &str = "Demasiados envíos seguidos. Probá de nuevo en unos minutos.";

#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub contacto: String,
    #[serde(default)]
    pub mensaje: String,
    pub csrf_token: String,
}

impl ContactForm {
    fn errors(&self) -> Vec<String> {
        [
            validate::validate_optional(&self.nombre, "Nombre", NOMBRE_MAX),
            validate::validate_optional(&self.contacto, "WhatsApp o Email", CONTACTO_MAX),
            validate::validate_optional(&self.mensaje, "Mensaje", MENSAJE_MAX),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn into_draft(self) -> ContactDraft {
        ContactDraft {
            nombre: self.nombre,
            contacto: self.contacto,
            mensaje: self.mensaje,
        }
    }
}

/// POST /contacto
/// Demo submission: validated and acknowledged, never delivered or stored.
pub async fn submit(
    req: HttpRequest,
    session: Session,
    form: web::Form<ContactForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let ip = client_ip(&req);
    if limiter.is_blocked(ip) {
        log::warn!("Contact form rate limit hit for {ip}");
        let ctx = PageContext::build(&session);
        let tmpl = LandingTemplate::new(ctx)
            .with_contact_errors(vec![RATE_LIMITED_MESSAGE.to_string()], form.into_draft());
        return render_with_status(tmpl, StatusCode::TOO_MANY_REQUESTS);
    }

    let errors = form.errors();
    if !errors.is_empty() {
        let ctx = PageContext::build(&session);
        let tmpl = LandingTemplate::new(ctx).with_contact_errors(errors, form.into_draft());
        return render(tmpl);
    }

    limiter.record(ip);
    log::info!(
        "Contact form received (demo, not delivered): nombre={}c contacto={}c mensaje={}c",
        form.nombre.chars().count(),
        form.contacto.chars().count(),
        form.mensaje.chars().count()
    );

    set_flash(&session, SENT_MESSAGE)?;
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/#contacto"))
        .finish())
}
