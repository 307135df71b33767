use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::companies::{CompanyFilter, CreateCompanyRequest, UpdateCompanyRequest},
    entity::{
        Companies,
        companies::{ActiveModel, Column, Model},
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn create_company<C: ConnectionTrait>(
    db: &C,
    payload: CreateCompanyRequest,
) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        owner_id: Set(payload.owner_id),
        name: Set(payload.name),
        registration_number: Set(payload.registration_number),
        address: Set(payload.address),
        ..Default::default()
    };
    let company = active.insert(db).await?;
    tracing::info!(company_id = %company.id, owner_id = %company.owner_id, "company created");
    Ok(company)
}

pub async fn get_company<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Companies::find_by_id(id).one(db).await?)
}

pub async fn update_company<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateCompanyRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Companies::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(owner_id) = payload.owner_id {
        active.owner_id = Set(owner_id);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(registration_number) = payload.registration_number {
        active.registration_number = Set(Some(registration_number));
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_company<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Companies::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_companies<C: ConnectionTrait>(
    db: &C,
    filter: &CompanyFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::Name, filter.name.as_deref())
        .contains(Column::Address, filter.address.as_deref())
        .equals(Column::OwnerId, filter.owner_id)
        .build();
    Ok(fetch_page(db, Companies::find().filter(condition), page).await?)
}
