use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::retailers::{CreateRetailerRequest, RetailerFilter, RetailerList, UpdateRetailerRequest},
    error::{AppError, AppResult},
    middleware::auth::{BearerToken, creation_owner, ensure_owner},
    models::Retailer,
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::retailer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_retailers).post(create_retailer))
        .route(
            "/{id}",
            get(get_retailer).put(update_retailer).delete(delete_retailer),
        )
}

#[utoipa::path(
    get,
    path = "/api/retailers",
    params(PageParams, RetailerFilter),
    responses(
        (status = 200, description = "List retailers", body = ApiResponse<RetailerList>)
    ),
    tag = "Retailers"
)]
pub async fn list_retailers(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<RetailerFilter>,
) -> AppResult<Json<ApiResponse<RetailerList>>> {
    let (retailers, total) = retailer_service::list_retailers(&state.orm, &filter, page).await?;
    let data = RetailerList {
        items: retailers.into_iter().map(Retailer::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Retailers", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/retailers/{id}",
    params(
        ("id" = Uuid, Path, description = "Retailer ID")
    ),
    responses(
        (status = 200, description = "Get retailer", body = ApiResponse<Retailer>),
        (status = 404, description = "Retailer not found"),
    ),
    tag = "Retailers"
)]
pub async fn get_retailer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Retailer>>> {
    let retailer = retailer_service::get_retailer(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Retailer", Retailer::from(retailer), None)))
}

#[utoipa::path(
    post,
    path = "/api/retailers",
    request_body = CreateRetailerRequest,
    responses(
        (status = 200, description = "Create retailer", body = ApiResponse<Retailer>),
        (status = 400, description = "Invalid payload or user already registered as a retailer"),
        (status = 401, description = "Invalid token or unknown identity"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Retailers"
)]
pub async fn create_retailer(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateRetailerRequest>,
) -> AppResult<Json<ApiResponse<Retailer>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let owner = creation_owner(
        &txn,
        state.verifier.as_ref(),
        token.as_deref(),
        payload.user_id,
    )
    .await?;

    if let Some(user_id) = owner {
        if retailer_service::find_by_user(&txn, user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "User is already registered as a retailer".into(),
            ));
        }
    }

    let retailer = retailer_service::create_retailer(&txn, owner, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Retailer created",
        Retailer::from(retailer),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/retailers/{id}",
    params(
        ("id" = Uuid, Path, description = "Retailer ID")
    ),
    request_body = UpdateRetailerRequest,
    responses(
        (status = 200, description = "Updated retailer", body = ApiResponse<Retailer>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token does not belong to the owner"),
        (status = 404, description = "Retailer not found"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Retailers"
)]
pub async fn update_retailer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    token: BearerToken,
    Json(payload): Json<UpdateRetailerRequest>,
) -> AppResult<Json<ApiResponse<Retailer>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let existing = retailer_service::get_retailer(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(&txn, state.verifier.as_ref(), token.as_deref(), existing.user_id).await?;

    let retailer = retailer_service::update_retailer(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Retailer::from(retailer),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/retailers/{id}",
    params(
        ("id" = Uuid, Path, description = "Retailer ID")
    ),
    responses(
        (status = 200, description = "Deleted retailer"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token does not belong to the owner"),
        (status = 404, description = "Retailer not found"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Retailers"
)]
pub async fn delete_retailer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    token: BearerToken,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    let existing = retailer_service::get_retailer(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(&txn, state.verifier.as_ref(), token.as_deref(), existing.user_id).await?;

    if !retailer_service::delete_retailer(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
