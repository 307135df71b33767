use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Retailer;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateRetailerRequest {
    /// Ignored when the request carries a bearer token.
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub address: Option<String>,
    pub store_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateRetailerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub store_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RetailerFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub store_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RetailerList {
    pub items: Vec<Retailer>,
}
