use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "designation": "Backend Developer",
        "joined_date": "2024-01-01"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Backend Developer", nullable = true)]
    pub designation: Option<String>,

    #[schema(example = "2024-01-01", value_type = Option<String>, format = "date", nullable = true)]
    pub joined_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "EMP-001", value_type = String)]
    #[validate(length(min = 1, message = "employee_id must not be empty"))]
    pub employee_id: String,

    #[schema(example = "John Doe", value_type = String)]
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,

    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    #[validate(email)]
    pub email: String,

    #[schema(example = "Engineering", value_type = String)]
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: String,

    #[schema(example = "Backend Developer", value_type = Option<String>)]
    pub designation: Option<String>,

    #[schema(example = "2024-01-01", format = "date", value_type = Option<String>)]
    pub joined_date: Option<NaiveDate>,
}
