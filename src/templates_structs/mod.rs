// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::security::csrf;
use crate::security::session::{get_theme, take_flash};
use crate::models::site::{self, PROFILE};
use crate::models::theme::Theme;

/// Common context shared by every page.
/// Templates access these as `ctx.theme`, `ctx.flash`, etc.
pub struct PageContext {
    pub site_name: String,
    pub theme: Theme,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub year: i32,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            site_name: PROFILE.name.to_string(),
            theme: get_theme(session),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            year: site::footer_year(),
        }
    }
}

mod api;
mod landing;
mod procedure;

pub use self::api::ApiErrorResponse;
pub use self::landing::{ContactDraft, LandingTemplate};
pub use self::procedure::{ProcedureDetailTemplate, ProcedureNotFoundTemplate};
