use actix_web::{web, HttpResponse};

use crate::models::procedure::{self, Lookup};
use crate::templates_structs::ApiErrorResponse;

/// GET /api/v1/procedimientos - All records in listing order
pub async fn list() -> HttpResponse {
    HttpResponse::Ok().json(procedure::table())
}

/// GET /api/v1/procedimientos/{identifier} - One record, or 404 JSON
pub async fn read(path: web::Path<String>) -> HttpResponse {
    let identifier = path.into_inner();
    match procedure::resolve(&identifier) {
        Lookup::Found(record) => HttpResponse::Ok().json(record),
        Lookup::NotFound => HttpResponse::NotFound().json(ApiErrorResponse {
            error: "Procedure not found".to_string(),
            details: Some(format!("No content for identifier '{identifier}'")),
        }),
    }
}
