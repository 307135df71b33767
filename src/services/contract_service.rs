use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::contracts::{ContractFilter, CreateContractRequest, UpdateContractRequest},
    entity::{
        Contracts,
        contracts::{ActiveModel, Column, ContractStatus, Model, PaymentStatus},
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn create_contract<C: ConnectionTrait>(
    db: &C,
    payload: CreateContractRequest,
) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        farmer_id: Set(payload.farmer_id),
        wholesaler_id: Set(payload.wholesaler_id),
        crop_name: Set(payload.crop_name),
        quantity: Set(payload.quantity),
        unit_price: Set(payload.unit_price),
        delivery_date: Set(payload.delivery_date),
        status: Set(payload.status.unwrap_or(ContractStatus::Draft)),
        payment_status: Set(payload.payment_status.unwrap_or(PaymentStatus::Unpaid)),
        ..Default::default()
    };
    let contract = active.insert(db).await?;
    tracing::info!(contract_id = %contract.id, farmer_id = %contract.farmer_id, "contract created");
    Ok(contract)
}

pub async fn get_contract<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Contracts::find_by_id(id).one(db).await?)
}

/// Any status may replace any other; there is no transition table.
pub async fn update_contract<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateContractRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Contracts::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(wholesaler_id) = payload.wholesaler_id {
        active.wholesaler_id = Set(Some(wholesaler_id));
    }
    if let Some(crop_name) = payload.crop_name {
        active.crop_name = Set(crop_name);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(unit_price) = payload.unit_price {
        active.unit_price = Set(unit_price);
    }
    if let Some(delivery_date) = payload.delivery_date {
        active.delivery_date = Set(Some(delivery_date));
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(payment_status) = payload.payment_status {
        active.payment_status = Set(payment_status);
    }

    let contract = active.update(db).await?;
    tracing::debug!(
        contract_id = %contract.id,
        status = ?contract.status,
        payment_status = ?contract.payment_status,
        "contract updated"
    );
    Ok(Some(contract))
}

pub async fn delete_contract<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Contracts::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_contracts<C: ConnectionTrait>(
    db: &C,
    filter: &ContractFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::CropName, filter.crop_name.as_deref())
        .equals(Column::FarmerId, filter.farmer_id)
        .equals(Column::WholesalerId, filter.wholesaler_id)
        .equals(Column::Status, filter.status)
        .equals(Column::PaymentStatus, filter.payment_status)
        .between(Column::Quantity, filter.quantity_min, filter.quantity_max)
        .between(Column::UnitPrice, filter.unit_price_min, filter.unit_price_max)
        .between(Column::DeliveryDate, filter.delivery_from, filter.delivery_to)
        .build();
    Ok(fetch_page(db, Contracts::find().filter(condition), page).await?)
}
