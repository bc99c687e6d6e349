use askama::Template;

use super::PageContext;
use crate::models::site::{
    Faq, Location, NavLink, Product, ProcedureSummary, Profile, FAQS, LOCATIONS, NAV_LINKS,
    PROCEDURE_SUMMARIES, PRODUCTS, PROFILE,
};

/// Values echoed back into the contact form after a failed submission.
#[derive(Default)]
pub struct ContactDraft {
    pub nombre: String,
    pub contacto: String,
    pub mensaje: String,
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub ctx: PageContext,
    pub profile: &'static Profile,
    pub nav_links: &'static [NavLink],
    pub procedures: &'static [ProcedureSummary],
    pub locations: &'static [Location],
    pub products: &'static [Product],
    pub faqs: &'static [Faq],
    pub contact_errors: Vec<String>,
    pub contact: ContactDraft,
}

impl LandingTemplate {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            profile: &PROFILE,
            nav_links: &NAV_LINKS,
            procedures: &PROCEDURE_SUMMARIES,
            locations: &LOCATIONS,
            products: &PRODUCTS,
            faqs: &FAQS,
            contact_errors: vec![],
            contact: ContactDraft::default(),
        }
    }

    pub fn with_contact_errors(mut self, errors: Vec<String>, draft: ContactDraft) -> Self {
        self.contact_errors = errors;
        self.contact = draft;
        self
    }
}
