use std::time::Duration;

use actix_web::cookie::Key;

use crate::security::rate_limit::{DEFAULT_MAX_PER_WINDOW, DEFAULT_WINDOW_SECS};

/// Runtime settings, read from the environment. `main` loads `.env` first.
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub session_key: Key,
    pub cookie_secure: bool,
    pub contact_max_per_window: usize,
    pub contact_window: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16);
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "./static".to_string());

        // Session encryption key: SESSION_KEY keeps sessions valid across restarts
        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        let cookie_secure = matches!(
            lookup("COOKIE_SECURE").as_deref().map(str::trim),
            Some("1") | Some("true")
        );
        let contact_max_per_window = parse_or(&lookup, "CONTACT_MAX_PER_WINDOW", DEFAULT_MAX_PER_WINDOW);
        let contact_window = Duration::from_secs(parse_or(&lookup, "CONTACT_WINDOW_SECS", DEFAULT_WINDOW_SECS));

        Self {
            host,
            port,
            static_dir,
            session_key,
            cookie_secure,
            contact_max_per_window,
            contact_window,
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {key}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}
