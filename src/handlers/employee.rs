use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::models::employee::EmployeePayload;

pub async fn get_employees(pool: web::Data<PgPool>) -> Result<HttpResponse, actix_web::Error> {
    let employees = db::list_employees(&**pool).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    pool: web::Data<PgPool>,
    id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = db::get_employee(&**pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    pool: web::Data<PgPool>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, actix_web::Error> {
    let created = db::insert_employee(&**pool, &new_employee).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    pool: web::Data<PgPool>,
    id: web::Path<i32>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated = db::update_employee(&**pool, id.into_inner(), &updates).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    pool: web::Data<PgPool>,
    id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    db::delete_employee(&**pool, id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted",
    })))
}
