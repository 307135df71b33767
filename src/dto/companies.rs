use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Company;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCompanyRequest {
    pub owner_id: Uuid,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub registration_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateCompanyRequest {
    pub owner_id: Option<Uuid>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub registration_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyList {
    pub items: Vec<Company>,
}
