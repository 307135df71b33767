use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::wholesalers::{CreateWholesalerRequest, WholesalerFilter, WholesalerList, UpdateWholesalerRequest},
    error::{AppError, AppResult},
    middleware::auth::{BearerToken, creation_owner, ensure_owner},
    models::Wholesaler,
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::wholesaler_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wholesalers).post(create_wholesaler))
        .route(
            "/{id}",
            get(get_wholesaler).put(update_wholesaler).delete(delete_wholesaler),
        )
}

#[utoipa::path(
    get,
    path = "/api/wholesalers",
    params(PageParams, WholesalerFilter),
    responses(
        (status = 200, description = "List wholesalers", body = ApiResponse<WholesalerList>)
    ),
    tag = "Wholesalers"
)]
pub async fn list_wholesalers(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<WholesalerFilter>,
) -> AppResult<Json<ApiResponse<WholesalerList>>> {
    let (wholesalers, total) = wholesaler_service::list_wholesalers(&state.orm, &filter, page).await?;
    let data = WholesalerList {
        items: wholesalers.into_iter().map(Wholesaler::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Wholesalers", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/wholesalers/{id}",
    params(
        ("id" = Uuid, Path, description = "Wholesaler ID")
    ),
    responses(
        (status = 200, description = "Get wholesaler", body = ApiResponse<Wholesaler>),
        (status = 404, description = "Wholesaler not found"),
    ),
    tag = "Wholesalers"
)]
pub async fn get_wholesaler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Wholesaler>>> {
    let wholesaler = wholesaler_service::get_wholesaler(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Wholesaler", Wholesaler::from(wholesaler), None)))
}

#[utoipa::path(
    post,
    path = "/api/wholesalers",
    request_body = CreateWholesalerRequest,
    responses(
        (status = 200, description = "Create wholesaler", body = ApiResponse<Wholesaler>),
        (status = 400, description = "Invalid payload or user already registered as a wholesaler"),
        (status = 401, description = "Invalid token or unknown identity"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Wholesalers"
)]
pub async fn create_wholesaler(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateWholesalerRequest>,
) -> AppResult<Json<ApiResponse<Wholesaler>>> {
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
        if wholesaler_service::find_by_user(&txn, user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "User is already registered as a wholesaler".into(),
            ));
        }
    }

    let wholesaler = wholesaler_service::create_wholesaler(&txn, owner, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Wholesaler created",
        Wholesaler::from(wholesaler),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/wholesalers/{id}",
    params(
        ("id" = Uuid, Path, description = "Wholesaler ID")
    ),
    request_body = UpdateWholesalerRequest,
    responses(
        (status = 200, description = "Updated wholesaler", body = ApiResponse<Wholesaler>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token does not belong to the owner"),
        (status = 404, description = "Wholesaler not found"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Wholesalers"
)]
pub async fn update_wholesaler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    token: BearerToken,
    Json(payload): Json<UpdateWholesalerRequest>,
) -> AppResult<Json<ApiResponse<Wholesaler>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let existing = wholesaler_service::get_wholesaler(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(&txn, state.verifier.as_ref(), token.as_deref(), existing.user_id).await?;

    let wholesaler = wholesaler_service::update_wholesaler(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Wholesaler::from(wholesaler),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/wholesalers/{id}",
    params(
        ("id" = Uuid, Path, description = "Wholesaler ID")
    ),
    responses(
        (status = 200, description = "Deleted wholesaler"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token does not belong to the owner"),
        (status = 404, description = "Wholesaler not found"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Wholesalers"
)]
pub async fn delete_wholesaler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    token: BearerToken,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    let existing = wholesaler_service::get_wholesaler(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(&txn, state.verifier.as_ref(), token.as_deref(), existing.user_id).await?;

    if !wholesaler_service::delete_wholesaler(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
