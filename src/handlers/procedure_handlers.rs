use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render, render_with_status};
use crate::models::procedure::{self, Lookup};
use crate::templates_structs::{PageContext, ProcedureDetailTemplate, ProcedureNotFoundTemplate};

/// GET /procedimientos
/// The listing lives on the landing page.
pub async fn list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/#procedimientos"))
        .finish()
}

/// GET /procedimientos/{identifier}
/// Unknown identifiers get the "not available yet" page, not an error.
pub async fn detail(
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identifier = path.into_inner();
    let ctx = PageContext::build(&session);

    match procedure::resolve(&identifier) {
        Lookup::Found(item) => render(ProcedureDetailTemplate { ctx, item }),
        Lookup::NotFound => {
            log::debug!("No procedure content for {identifier:?}");
            render_with_status(ProcedureNotFoundTemplate { ctx }, StatusCode::NOT_FOUND)
        }
    }
}
