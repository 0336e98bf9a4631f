use sqlx::PgPool;
use std::env;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeePayload};

pub async fn create_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}

pub async fn list_employees(pool: &PgPool) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees")
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

pub async fn get_employee(pool: &PgPool, id: i32) -> Result<Employee, AppError> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))
}

pub async fn insert_employee(pool: &PgPool, employee: &EmployeePayload) -> Result<Employee, AppError> {
    let created = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (first_name, last_name, email, phone_number, hire_date, job_title, salary) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.email)
    .bind(&employee.phone_number)
    .bind(&employee.hire_date)
    .bind(&employee.job_title)
    .bind(employee.salary)
    .fetch_one(pool)
    .await?;
    Ok(created)
}

/// Full replacement of every mutable column. Missing rows are reported as
/// not found rather than silently succeeding.
pub async fn update_employee(
    pool: &PgPool,
    id: i32,
    employee: &EmployeePayload,
) -> Result<Employee, AppError> {
    sqlx::query_as::<_, Employee>(
        "UPDATE employees SET first_name = $1, last_name = $2, email = $3, phone_number = $4, \
         hire_date = $5, job_title = $6, salary = $7 WHERE id = $8 RETURNING *",
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.email)
    .bind(&employee.phone_number)
    .bind(&employee.hire_date)
    .bind(&employee.job_title)
    .bind(employee.salary)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))
}

pub async fn delete_employee(pool: &PgPool, id: i32) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }
    Ok(())
}
