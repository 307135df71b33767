use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::centers::{CenterFilter, CreateCenterRequest, UpdateCenterRequest},
    entity::{
        CenterWholesalers, Centers, Wholesalers, center_wholesalers,
        centers::{ActiveModel, Column, Model},
        wholesalers,
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn create_center<C: ConnectionTrait>(
    db: &C,
    payload: CreateCenterRequest,
) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(payload.company_id),
        name: Set(payload.name),
        address: Set(payload.address),
        capacity: Set(payload.capacity),
        ..Default::default()
    };
    let center = active.insert(db).await?;
    tracing::info!(center_id = %center.id, company_id = %center.company_id, "center created");
    Ok(center)
}

pub async fn get_center<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Centers::find_by_id(id).one(db).await?)
}

pub async fn update_center<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateCenterRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Centers::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(company_id) = payload.company_id {
        active.company_id = Set(company_id);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(capacity) = payload.capacity {
        active.capacity = Set(Some(capacity));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_center<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Centers::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_centers<C: ConnectionTrait>(
    db: &C,
    filter: &CenterFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::Name, filter.name.as_deref())
        .contains(Column::Address, filter.address.as_deref())
        .equals(Column::CompanyId, filter.company_id)
        .between(Column::Capacity, filter.capacity_min, filter.capacity_max)
        .build();
    Ok(fetch_page(db, Centers::find().filter(condition), page).await?)
}

/// Wholesalers serving the center, or `None` when the center does not exist.
pub async fn list_wholesalers<C: ConnectionTrait>(
    db: &C,
    center_id: Uuid,
) -> AppResult<Option<Vec<wholesalers::Model>>> {
    let Some(center) = Centers::find_by_id(center_id).one(db).await? else {
        return Ok(None);
    };
    Ok(Some(center.find_related(Wholesalers).all(db).await?))
}

/// Links a wholesaler to a center. Linking an existing pair is a no-op.
/// Returns `false` when either side does not exist.
pub async fn link_wholesaler<C: ConnectionTrait>(
    db: &C,
    center_id: Uuid,
    wholesaler_id: Uuid,
) -> AppResult<bool> {
    if Centers::find_by_id(center_id).one(db).await?.is_none()
        || Wholesalers::find_by_id(wholesaler_id).one(db).await?.is_none()
    {
        return Ok(false);
    }

    let existing = CenterWholesalers::find_by_id((center_id, wholesaler_id))
        .one(db)
        .await?;
    if existing.is_none() {
        center_wholesalers::ActiveModel {
            center_id: Set(center_id),
            wholesaler_id: Set(wholesaler_id),
        }
        .insert(db)
        .await?;
        tracing::info!(%center_id, %wholesaler_id, "wholesaler linked to center");
    }
    Ok(true)
}

/// Returns `false` when the pair was not linked.
pub async fn unlink_wholesaler<C: ConnectionTrait>(
    db: &C,
    center_id: Uuid,
    wholesaler_id: Uuid,
) -> AppResult<bool> {
    let result = CenterWholesalers::delete_by_id((center_id, wholesaler_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
