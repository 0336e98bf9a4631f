//! Request-level tests for decode and path-parameter rejection. These paths
//! fail before any query executes, so the pool is never connected.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use employees_backend::configure;

fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/company")
        .expect("valid connection string")
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn malformed_json_body_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/employees")
        .insert_header(("content-type", "application/json"))
        .set_payload("not-json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn mistyped_salary_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/employees")
        .set_json(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.com",
            "phone_number": "555",
            "hire_date": "1843-01-01",
            "job_title": "Analyst",
            "salary": "a lot"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn missing_fields_are_rejected_on_update() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/employees/7")
        .set_json(json!({ "first_name": "Ada" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn non_integer_id_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/employees/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn non_integer_id_is_rejected_on_delete() {
    let app = init_app!();

    let req = test::TestRequest::delete().uri("/employees/latest").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
