//! HTTP tests for the read-only surface: landing page, procedure detail
//! pages, the not-found fallback, the JSON API and the default 404.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use common::{body_string, location};

#[actix_web::test]
async fn test_landing_page_renders_all_sections() {
    let app = init_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    for anchor in ["id=\"bio\"", "id=\"procedimientos\"", "id=\"sedes\"", "id=\"contacto\"", "id=\"productos\"", "id=\"faq\""] {
        assert!(html.contains(anchor), "missing {anchor}");
    }
    assert!(html.contains("Dra. X (placeholder)"));
    assert!(html.contains("Accesos rápidos"));
    assert!(html.contains("Procedimiento A (placeholder)"));
    assert!(html.contains("href=\"/procedimientos/ginecologia-integral\""));
    assert!(html.contains("¿Cómo reservo un turno?"));
    // Auto theme by default, toggle offers dark mode
    assert!(html.contains("data-theme=\"auto\""));
    assert!(html.contains("Modo oscuro"));
}

#[actix_web::test]
async fn test_procedure_detail_page() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/procedimientos/ginecologia-integral")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("Ginecología integral (placeholder)"));
    assert!(html.contains("Evaluación completa y seguimiento personalizado"));
    assert!(html.contains("¿Qué incluye?"));
    assert!(html.contains("Historia clínica"));
    assert!(html.contains("¿Para quién es?"));
    assert!(html.contains("Chequeos preventivos"));
    assert!(html.contains("Notas"));
    assert!(html.contains("href=\"/#contacto\""));
    assert!(html.contains("Ver otros procedimientos"));
}

#[actix_web::test]
async fn test_every_procedure_has_a_page() {
    let app = init_app!();
    for record in consultorio::models::procedure::table() {
        let req = test::TestRequest::get()
            .uri(&format!("/procedimientos/{}", record.identifier))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", record.identifier);
        let html = body_string(resp).await;
        assert!(html.contains(record.title));
    }
}

#[actix_web::test]
async fn test_unknown_procedure_renders_fallback() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/procedimientos/no-existe").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let html = body_string(resp).await;
    assert!(html.contains("Procedimiento no encontrado"));
    assert!(html.contains("todavía no cargamos contenido"));
    assert!(html.contains("href=\"/#procedimientos\""));
}

#[actix_web::test]
async fn test_procedure_lookup_is_case_sensitive_over_http() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/procedimientos/Ginecologia-Integral")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp).await.contains("Procedimiento no encontrado"));
}

#[actix_web::test]
async fn test_empty_identifier_is_not_found() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/procedimientos/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_procedures_index_redirects_to_listing() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/procedimientos").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/#procedimientos");
}

#[actix_web::test]
async fn test_api_lists_procedures_in_order() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/procedimientos").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["identifier"].as_str())
        .collect();
    assert_eq!(
        ids,
        ["ginecologia-integral", "menopausia-salud-hormonal", "estetica-y-funcional"]
    );
}

#[actix_web::test]
async fn test_api_reads_one_procedure() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/procedimientos/menopausia-salud-hormonal")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Menopausia y salud hormonal (placeholder)");
    assert_eq!(body["forWho"][0], "Perimenopausia");
    assert_eq!(body["includes"].as_array().map(Vec::len), Some(4));
}

#[actix_web::test]
async fn test_api_unknown_procedure_is_json_404() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/procedimientos/no-existe")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Procedure not found");
}

#[actix_web::test]
async fn test_unknown_route_uses_site_404() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/no/such/page").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp).await.contains("Página no encontrada"));
}

#[actix_web::test]
async fn test_static_assets_are_served() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/static/site.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
