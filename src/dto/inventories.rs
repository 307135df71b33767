use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Inventory, InventoryItem};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateInventoryRequest {
    pub center_id: Uuid,
    pub snapshot_date: NaiveDate,
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateInventoryRequest {
    pub center_id: Option<Uuid>,
    pub snapshot_date: Option<NaiveDate>,
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryFilter {
    pub center_id: Option<Uuid>,
    pub snapshot_from: Option<NaiveDate>,
    pub snapshot_to: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryList {
    pub items: Vec<Inventory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryWithItems {
    pub inventory: Inventory,
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateInventoryItemRequest {
    pub inventory_id: Uuid,
    #[validate(length(min = 1, message = "crop_name is required"))]
    pub crop_name: String,
    #[validate(length(min = 1, message = "quality_grade is required"))]
    pub quality_grade: String,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateInventoryItemRequest {
    #[validate(length(min = 1, message = "crop_name is required"))]
    pub crop_name: Option<String>,
    #[validate(length(min = 1, message = "quality_grade is required"))]
    pub quality_grade: Option<String>,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: Option<f64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryItemFilter {
    pub crop_name: Option<String>,
    pub quality_grade: Option<String>,
    pub inventory_id: Option<Uuid>,
    pub quantity_min: Option<f64>,
    pub quantity_max: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryItemList {
    pub items: Vec<InventoryItem>,
}
