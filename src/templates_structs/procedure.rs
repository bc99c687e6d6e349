use askama::Template;

use super::PageContext;
use crate::models::procedure::ProcedureRecord;

#[derive(Template)]
#[template(path = "procedures/detail.html")]
pub struct ProcedureDetailTemplate {
    pub ctx: PageContext,
    pub item: &'static ProcedureRecord,
}

/// Fallback shown when an identifier has no content yet.
#[derive(Template)]
#[template(path = "procedures/not_found.html")]
pub struct ProcedureNotFoundTemplate {
    pub ctx: PageContext,
}
