use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::templates_structs::{LandingTemplate, PageContext};

pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    render(LandingTemplate::new(ctx))
}
