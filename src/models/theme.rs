/// Visitor colour scheme. `Auto` defers to `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Fallback when the client does not say which scheme Auto resolved to.
    /// With scripts on, site.js posts an explicit theme instead.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::Auto => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Label of the toggle button, naming the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() { "Modo claro" } else { "Modo oscuro" }
    }
}
