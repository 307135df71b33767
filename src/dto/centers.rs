use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Center;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCenterRequest {
    pub company_id: Uuid,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub address: Option<String>,
    #[validate(range(min = 0.0, message = "capacity must not be negative"))]
    pub capacity: Option<f64>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateCenterRequest {
    pub company_id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub address: Option<String>,
    #[validate(range(min = 0.0, message = "capacity must not be negative"))]
    pub capacity: Option<f64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CenterFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub company_id: Option<Uuid>,
    pub capacity_min: Option<f64>,
    pub capacity_max: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CenterList {
    pub items: Vec<Center>,
}
