use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::{
    dto::wholesalers::{CreateWholesalerRequest, UpdateWholesalerRequest, WholesalerFilter},
    entity::{
        Wholesalers,
        wholesalers::{ActiveModel, Column, Model},
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn find_by_user<C: ConnectionTrait>(db: &C, user_id: Uuid) -> AppResult<Option<Model>> {
    Ok(Wholesalers::find()
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

/// `user_id` is the resolved owner; the payload's own `user_id` is not read here.
pub async fn create_wholesaler<C: ConnectionTrait>(
    db: &C,
    user_id: Option<Uuid>,
    payload: CreateWholesalerRequest,
) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        company_id: Set(payload.company_id),
        name: Set(payload.name),
        address: Set(payload.address),
        phone: Set(payload.phone),
        ..Default::default()
    };
    let wholesaler = active.insert(db).await?;
    tracing::info!(wholesaler_id = %wholesaler.id, "wholesaler created");
    Ok(wholesaler)
}

pub async fn get_wholesaler<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Wholesalers::find_by_id(id).one(db).await?)
}

pub async fn update_wholesaler<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateWholesalerRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Wholesalers::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(company_id) = payload.company_id {
        active.company_id = Set(Some(company_id));
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_wholesaler<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Wholesalers::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_wholesalers<C: ConnectionTrait>(
    db: &C,
    filter: &WholesalerFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::Name, filter.name.as_deref())
        .contains(Column::Address, filter.address.as_deref())
        .equals(Column::CompanyId, filter.company_id)
        .equals(Column::UserId, filter.user_id)
        .build();
    Ok(fetch_page(db, Wholesalers::find().filter(condition), page).await?)
}
