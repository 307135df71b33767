use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::{
    dto::farmers::{CreateFarmerRequest, FarmerFilter, UpdateFarmerRequest},
    entity::{
        Contracts, Farmers, contracts,
        farmers::{ActiveModel, Column, Model},
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn find_by_user<C: ConnectionTrait>(db: &C, user_id: Uuid) -> AppResult<Option<Model>> {
    Ok(Farmers::find()
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

pub async fn create_farmer<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    payload: CreateFarmerRequest,
) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(payload.name),
        address: Set(payload.address),
        farm_size: Set(payload.farm_size),
        annual_output: Set(payload.annual_output),
        member_count: Set(payload.member_count),
        ..Default::default()
    };
    let farmer = active.insert(db).await?;
    tracing::info!(farmer_id = %farmer.id, user_id = %farmer.user_id, "farmer created");
    Ok(farmer)
}

pub async fn get_farmer<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Farmers::find_by_id(id).one(db).await?)
}

pub async fn update_farmer<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateFarmerRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Farmers::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(farm_size) = payload.farm_size {
        active.farm_size = Set(farm_size);
    }
    if let Some(annual_output) = payload.annual_output {
        active.annual_output = Set(annual_output);
    }
    if let Some(member_count) = payload.member_count {
        active.member_count = Set(member_count);
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_farmer<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Farmers::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_farmers<C: ConnectionTrait>(
    db: &C,
    filter: &FarmerFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::Name, filter.name.as_deref())
        .contains(Column::Address, filter.address.as_deref())
        .between(Column::FarmSize, filter.farm_size_min, filter.farm_size_max)
        .between(
            Column::AnnualOutput,
            filter.annual_output_min,
            filter.annual_output_max,
        )
        .between(
            Column::MemberCount,
            filter.member_count_min,
            filter.member_count_max,
        )
        .build();
    Ok(fetch_page(db, Farmers::find().filter(condition), page).await?)
}

/// Contracts signed by the farmer, or `None` when the farmer does not exist.
pub async fn list_contracts<C: ConnectionTrait>(
    db: &C,
    farmer_id: Uuid,
) -> AppResult<Option<Vec<contracts::Model>>> {
    let Some(farmer) = Farmers::find_by_id(farmer_id).one(db).await? else {
        return Ok(None);
    };
    Ok(Some(farmer.find_related(Contracts).all(db).await?))
}
