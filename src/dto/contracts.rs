use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entity::contracts::{ContractStatus, PaymentStatus},
    models::Contract,
};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateContractRequest {
    pub farmer_id: Uuid,
    pub wholesaler_id: Option<Uuid>,
    #[validate(length(min = 1, message = "crop_name is required"))]
    pub crop_name: String,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
    #[validate(range(min = 0.0, message = "unit_price must not be negative"))]
    pub unit_price: f64,
    pub delivery_date: Option<NaiveDate>,
    /// Defaults to DRAFT.
    pub status: Option<ContractStatus>,
    /// Defaults to UNPAID.
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateContractRequest {
    pub wholesaler_id: Option<Uuid>,
    #[validate(length(min = 1, message = "crop_name is required"))]
    pub crop_name: Option<String>,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: Option<f64>,
    #[validate(range(min = 0.0, message = "unit_price must not be negative"))]
    pub unit_price: Option<f64>,
    pub delivery_date: Option<NaiveDate>,
    pub status: Option<ContractStatus>,
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContractFilter {
    pub crop_name: Option<String>,
    pub farmer_id: Option<Uuid>,
    pub wholesaler_id: Option<Uuid>,
    pub status: Option<ContractStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub quantity_min: Option<f64>,
    pub quantity_max: Option<f64>,
    pub unit_price_min: Option<f64>,
    pub unit_price_max: Option<f64>,
    /// Earliest delivery date, inclusive.
    pub delivery_from: Option<NaiveDate>,
    /// Latest delivery date, inclusive.
    pub delivery_to: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContractList {
    pub items: Vec<Contract>,
}
