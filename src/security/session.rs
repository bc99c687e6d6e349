use actix_session::Session;

use crate::errors::AppError;
use crate::models::theme::Theme;

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session
        .insert("flash", message)
        .map_err(|e| AppError::Session(format!("Failed to store flash: {e}")))
}

/// Stored theme preference; `Auto` when unset or unreadable.
pub fn get_theme(session: &Session) -> Theme {
    session
        .get::<String>("theme")
        .unwrap_or(None)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn set_theme(session: &Session, theme: Theme) -> Result<(), AppError> {
    session
        .insert("theme", theme.as_str())
        .map_err(|e| AppError::Session(format!("Failed to store theme: {e}")))
}
