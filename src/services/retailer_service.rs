use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::{
    dto::retailers::{CreateRetailerRequest, RetailerFilter, UpdateRetailerRequest},
    entity::{
        Retailers,
        retailers::{ActiveModel, Column, Model},
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn find_by_user<C: ConnectionTrait>(db: &C, user_id: Uuid) -> AppResult<Option<Model>> {
    Ok(Retailers::find()
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

pub async fn create_retailer<C: ConnectionTrait>(
    db: &C,
    user_id: Option<Uuid>,
    payload: CreateRetailerRequest,
) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(payload.name),
        address: Set(payload.address),
        store_type: Set(payload.store_type),
        ..Default::default()
    };
    let retailer = active.insert(db).await?;
    tracing::info!(retailer_id = %retailer.id, "retailer created");
    Ok(retailer)
}

pub async fn get_retailer<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Retailers::find_by_id(id).one(db).await?)
}

pub async fn update_retailer<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateRetailerRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Retailers::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(store_type) = payload.store_type {
        active.store_type = Set(Some(store_type));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_retailer<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Retailers::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_retailers<C: ConnectionTrait>(
    db: &C,
    filter: &RetailerFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::Name, filter.name.as_deref())
        .contains(Column::Address, filter.address.as_deref())
        .contains(Column::StoreType, filter.store_type.as_deref())
        .build();
    Ok(fetch_page(db, Retailers::find().filter(condition), page).await?)
}
