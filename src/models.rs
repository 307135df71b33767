use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    centers, companies,
    contracts::{self, ContractStatus, PaymentStatus},
    farmers, inventories, inventory_items, retailers, users, wholesalers,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub external_id: Option<String>,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Wholesaler {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Center {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub capacity: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Farmer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub address: String,
    pub farm_size: f64,
    pub annual_output: f64,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Retailer {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub address: Option<String>,
    pub store_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Contract {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub wholesaler_id: Option<Uuid>,
    pub crop_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub delivery_date: Option<NaiveDate>,
    pub status: ContractStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Inventory {
    pub id: Uuid,
    pub center_id: Uuid,
    pub snapshot_date: NaiveDate,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub inventory_id: Uuid,
    pub crop_name: String,
    pub quality_grade: String,
    pub quantity: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(m: users::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            external_id: m.external_id,
            name: m.name,
            phone: m.phone,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<companies::Model> for Company {
    fn from(m: companies::Model) -> Self {
        Self {
            id: m.id,
            owner_id: m.owner_id,
            name: m.name,
            registration_number: m.registration_number,
            address: m.address,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<wholesalers::Model> for Wholesaler {
    fn from(m: wholesalers::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            company_id: m.company_id,
            name: m.name,
            address: m.address,
            phone: m.phone,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<centers::Model> for Center {
    fn from(m: centers::Model) -> Self {
        Self {
            id: m.id,
            company_id: m.company_id,
            name: m.name,
            address: m.address,
            capacity: m.capacity,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<farmers::Model> for Farmer {
    fn from(m: farmers::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            address: m.address,
            farm_size: m.farm_size,
            annual_output: m.annual_output,
            member_count: m.member_count,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<retailers::Model> for Retailer {
    fn from(m: retailers::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            address: m.address,
            store_type: m.store_type,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<contracts::Model> for Contract {
    fn from(m: contracts::Model) -> Self {
        Self {
            id: m.id,
            farmer_id: m.farmer_id,
            wholesaler_id: m.wholesaler_id,
            crop_name: m.crop_name,
            quantity: m.quantity,
            unit_price: m.unit_price,
            delivery_date: m.delivery_date,
            status: m.status,
            payment_status: m.payment_status,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<inventories::Model> for Inventory {
    fn from(m: inventories::Model) -> Self {
        Self {
            id: m.id,
            center_id: m.center_id,
            snapshot_date: m.snapshot_date,
            note: m.note,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<inventory_items::Model> for InventoryItem {
    fn from(m: inventory_items::Model) -> Self {
        Self {
            id: m.id,
            inventory_id: m.inventory_id,
            crop_name: m.crop_name,
            quality_grade: m.quality_grade,
            quantity: m.quantity,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}
