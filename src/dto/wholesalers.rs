use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Wholesaler;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateWholesalerRequest {
    /// Ignored when the request carries a bearer token.
    pub user_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateWholesalerRequest {
    pub company_id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WholesalerFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub company_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WholesalerList {
    pub items: Vec<Wholesaler>,
}
