use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest, UserFilter, UserList},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/by-external-id/{external_id}", get(get_user_by_external_id))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(PageParams, UserFilter),
    responses(
        (status = 200, description = "List users", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<UserFilter>,
) -> AppResult<Json<ApiResponse<UserList>>> {
    let (users, total) = user_service::list_users(&state.orm, &filter, page).await?;
    let data = UserList {
        items: users.into_iter().map(User::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Users", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = user_service::get_user(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("User", User::from(user), None)))
}

#[utoipa::path(
    get,
    path = "/api/users/by-external-id/{external_id}",
    params(
        ("external_id" = String, Path, description = "Identity provider subject")
    ),
    responses(
        (status = 200, description = "Get user by external identity", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user_by_external_id(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = user_service::find_by_external_id(&state.orm, &external_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("User", User::from(user), None)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Create user", body = ApiResponse<User>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Email or external id already registered"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let user = user_service::create_user(&txn, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "User created",
        User::from(user),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let user = user_service::update_user(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        User::from(user),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Deleted user"),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !user_service::delete_user(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
