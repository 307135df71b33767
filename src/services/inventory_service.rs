use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::inventories::{
        CreateInventoryItemRequest, CreateInventoryRequest, InventoryFilter,
        InventoryItemFilter, UpdateInventoryItemRequest, UpdateInventoryRequest,
    },
    entity::{Inventories, InventoryItems, inventories, inventory_items},
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn create_inventory<C: ConnectionTrait>(
    db: &C,
    payload: CreateInventoryRequest,
) -> AppResult<inventories::Model> {
    let active = inventories::ActiveModel {
        id: Set(Uuid::new_v4()),
        center_id: Set(payload.center_id),
        snapshot_date: Set(payload.snapshot_date),
        note: Set(payload.note),
        ..Default::default()
    };
    let inventory = active.insert(db).await?;
    tracing::info!(inventory_id = %inventory.id, center_id = %inventory.center_id, "inventory created");
    Ok(inventory)
}

pub async fn get_inventory<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> AppResult<Option<inventories::Model>> {
    Ok(Inventories::find_by_id(id).one(db).await?)
}

pub async fn get_inventory_with_items<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> AppResult<Option<(inventories::Model, Vec<inventory_items::Model>)>> {
    let Some(inventory) = Inventories::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let items = inventory.find_related(InventoryItems).all(db).await?;
    Ok(Some((inventory, items)))
}

pub async fn update_inventory<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateInventoryRequest,
) -> AppResult<Option<inventories::Model>> {
    let Some(existing) = Inventories::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: inventories::ActiveModel = existing.into();
    if let Some(center_id) = payload.center_id {
        active.center_id = Set(center_id);
    }
    if let Some(snapshot_date) = payload.snapshot_date {
        active.snapshot_date = Set(snapshot_date);
    }
    if let Some(note) = payload.note {
        active.note = Set(Some(note));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_inventory<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Inventories::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_inventories<C: ConnectionTrait>(
    db: &C,
    filter: &InventoryFilter,
    page: PageParams,
) -> AppResult<(Vec<inventories::Model>, u64)> {
    let condition = Predicates::new()
        .equals(inventories::Column::CenterId, filter.center_id)
        .between(
            inventories::Column::SnapshotDate,
            filter.snapshot_from,
            filter.snapshot_to,
        )
        .build();
    Ok(fetch_page(db, Inventories::find().filter(condition), page).await?)
}

pub async fn create_item<C: ConnectionTrait>(
    db: &C,
    payload: CreateInventoryItemRequest,
) -> AppResult<inventory_items::Model> {
    let active = inventory_items::ActiveModel {
        id: Set(Uuid::new_v4()),
        inventory_id: Set(payload.inventory_id),
        crop_name: Set(payload.crop_name),
        quality_grade: Set(payload.quality_grade),
        quantity: Set(payload.quantity),
        ..Default::default()
    };
    Ok(active.insert(db).await?)
}

pub async fn get_item<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> AppResult<Option<inventory_items::Model>> {
    Ok(InventoryItems::find_by_id(id).one(db).await?)
}

pub async fn update_item<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateInventoryItemRequest,
) -> AppResult<Option<inventory_items::Model>> {
    let Some(existing) = InventoryItems::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: inventory_items::ActiveModel = existing.into();
    if let Some(crop_name) = payload.crop_name {
        active.crop_name = Set(crop_name);
    }
    if let Some(quality_grade) = payload.quality_grade {
        active.quality_grade = Set(quality_grade);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_item<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = InventoryItems::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_items<C: ConnectionTrait>(
    db: &C,
    filter: &InventoryItemFilter,
    page: PageParams,
) -> AppResult<(Vec<inventory_items::Model>, u64)> {
    let condition = Predicates::new()
        .contains(inventory_items::Column::CropName, filter.crop_name.as_deref())
        .contains(
            inventory_items::Column::QualityGrade,
            filter.quality_grade.as_deref(),
        )
        .equals(inventory_items::Column::InventoryId, filter.inventory_id)
        .between(
            inventory_items::Column::Quantity,
            filter.quantity_min,
            filter.quantity_max,
        )
        .build();
    Ok(fetch_page(db, InventoryItems::find().filter(condition), page).await?)
}
