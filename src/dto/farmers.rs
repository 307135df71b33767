use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Farmer;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateFarmerRequest {
    /// Required unless the request carries a bearer token, which takes precedence.
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(range(min = 0.0, message = "farm_size must not be negative"))]
    pub farm_size: f64,
    #[validate(range(min = 0.0, message = "annual_output must not be negative"))]
    pub annual_output: f64,
    #[validate(range(min = 0, message = "member_count must not be negative"))]
    pub member_count: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateFarmerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: Option<String>,
    #[validate(range(min = 0.0, message = "farm_size must not be negative"))]
    pub farm_size: Option<f64>,
    #[validate(range(min = 0.0, message = "annual_output must not be negative"))]
    pub annual_output: Option<f64>,
    #[validate(range(min = 0, message = "member_count must not be negative"))]
    pub member_count: Option<i32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FarmerFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub farm_size_min: Option<f64>,
    pub farm_size_max: Option<f64>,
    pub annual_output_min: Option<f64>,
    pub annual_output_max: Option<f64>,
    pub member_count_min: Option<i32>,
    pub member_count_max: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FarmerList {
    pub items: Vec<Farmer>,
}
