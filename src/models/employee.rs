use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub hire_date: String,
    pub job_title: String,
    pub salary: f64,
}

/// Request body for create and update. Every field is required; update is a
/// full replacement, never a merge. An `id` member in the body is ignored,
/// the path parameter wins.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub hire_date: String,
    pub job_title: String,
    pub salary: f64,
}
