use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest, UserFilter},
    entity::{
        Users,
        users::{ActiveModel, Column, Model},
    },
    error::AppResult,
    routes::params::PageParams,
    services::filters::{Predicates, fetch_page},
};

pub async fn create_user<C: ConnectionTrait>(db: &C, payload: CreateUserRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(payload.email),
        external_id: Set(payload.external_id),
        name: Set(payload.name),
        phone: Set(payload.phone),
        ..Default::default()
    };
    let user = active.insert(db).await?;
    tracing::info!(user_id = %user.id, "user created");
    Ok(user)
}

pub async fn get_user<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<Model>> {
    Ok(Users::find_by_id(id).one(db).await?)
}

pub async fn find_by_external_id<C: ConnectionTrait>(
    db: &C,
    external_id: &str,
) -> AppResult<Option<Model>> {
    Ok(Users::find()
        .filter(Column::ExternalId.eq(external_id))
        .one(db)
        .await?)
}

pub async fn update_user<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    payload: UpdateUserRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Users::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(external_id) = payload.external_id {
        active.external_id = Set(Some(external_id));
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_user<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<bool> {
    let result = Users::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn list_users<C: ConnectionTrait>(
    db: &C,
    filter: &UserFilter,
    page: PageParams,
) -> AppResult<(Vec<Model>, u64)> {
    let condition = Predicates::new()
        .contains(Column::Email, filter.email.as_deref())
        .contains(Column::Name, filter.name.as_deref())
        .build();
    Ok(fetch_page(db, Users::find().filter(condition), page).await?)
}
