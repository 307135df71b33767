use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::User;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Subject the identity provider puts in its tokens.
    #[validate(length(min = 1, message = "external_id must not be empty"))]
    pub external_id: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "external_id must not be empty"))]
    pub external_id: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Case-insensitive substring of the email.
    pub email: Option<String>,
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}
