use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        centers::{CenterFilter, CenterList, CreateCenterRequest, UpdateCenterRequest},
        wholesalers::WholesalerList,
    },
    error::{AppError, AppResult},
    models::{Center, Wholesaler},
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::center_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_centers).post(create_center))
        .route(
            "/{id}",
            get(get_center).put(update_center).delete(delete_center),
        )
        .route("/{id}/wholesalers", get(list_center_wholesalers))
        .route(
            "/{id}/wholesalers/{wholesaler_id}",
            post(link_wholesaler).delete(unlink_wholesaler),
        )
}

#[utoipa::path(
    get,
    path = "/api/centers",
    params(PageParams, CenterFilter),
    responses(
        (status = 200, description = "List centers", body = ApiResponse<CenterList>)
    ),
    tag = "Centers"
)]
pub async fn list_centers(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<CenterFilter>,
) -> AppResult<Json<ApiResponse<CenterList>>> {
    let (centers, total) = center_service::list_centers(&state.orm, &filter, page).await?;
    let data = CenterList {
        items: centers.into_iter().map(Center::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Centers", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Center ID")
    ),
    responses(
        (status = 200, description = "Get center", body = ApiResponse<Center>),
        (status = 404, description = "Center not found"),
    ),
    tag = "Centers"
)]
pub async fn get_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Center>>> {
    let center = center_service::get_center(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Center", Center::from(center), None)))
}

#[utoipa::path(
    post,
    path = "/api/centers",
    request_body = CreateCenterRequest,
    responses(
        (status = 200, description = "Create center", body = ApiResponse<Center>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Centers"
)]
pub async fn create_center(
    State(state): State<AppState>,
    Json(payload): Json<CreateCenterRequest>,
) -> AppResult<Json<ApiResponse<Center>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let center = center_service::create_center(&txn, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Center created",
        Center::from(center),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Center ID")
    ),
    request_body = UpdateCenterRequest,
    responses(
        (status = 200, description = "Updated center", body = ApiResponse<Center>),
        (status = 404, description = "Center not found"),
    ),
    tag = "Centers"
)]
pub async fn update_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCenterRequest>,
) -> AppResult<Json<ApiResponse<Center>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let center = center_service::update_center(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Center::from(center),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Center ID")
    ),
    responses(
        (status = 200, description = "Deleted center"),
        (status = 404, description = "Center not found"),
    ),
    tag = "Centers"
)]
pub async fn delete_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !center_service::delete_center(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/centers/{id}/wholesalers",
    params(
        ("id" = Uuid, Path, description = "Center ID")
    ),
    responses(
        (status = 200, description = "Wholesalers serving the center", body = ApiResponse<WholesalerList>),
        (status = 404, description = "Center not found"),
    ),
    tag = "Centers"
)]
pub async fn list_center_wholesalers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<WholesalerList>>> {
    let wholesalers = center_service::list_wholesalers(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let total = wholesalers.len() as u64;
    let data = WholesalerList {
        items: wholesalers.into_iter().map(Wholesaler::from).collect(),
    };
    Ok(Json(ApiResponse::success(
        "Center wholesalers",
        data,
        Some(Meta::new(0, None, total)),
    )))
}

#[utoipa::path(
    post,
    path = "/api/centers/{id}/wholesalers/{wholesaler_id}",
    params(
        ("id" = Uuid, Path, description = "Center ID"),
        ("wholesaler_id" = Uuid, Path, description = "Wholesaler ID"),
    ),
    responses(
        (status = 200, description = "Wholesaler linked; linking twice is a no-op"),
        (status = 404, description = "Center or wholesaler not found"),
    ),
    tag = "Centers"
)]
pub async fn link_wholesaler(
    State(state): State<AppState>,
    Path((id, wholesaler_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !center_service::link_wholesaler(&txn, id, wholesaler_id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Linked",
        serde_json::json!({ "center_id": id, "wholesaler_id": wholesaler_id }),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/centers/{id}/wholesalers/{wholesaler_id}",
    params(
        ("id" = Uuid, Path, description = "Center ID"),
        ("wholesaler_id" = Uuid, Path, description = "Wholesaler ID"),
    ),
    responses(
        (status = 200, description = "Wholesaler unlinked"),
        (status = 404, description = "Pair was not linked"),
    ),
    tag = "Centers"
)]
pub async fn unlink_wholesaler(
    State(state): State<AppState>,
    Path((id, wholesaler_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !center_service::unlink_wholesaler(&txn, id, wholesaler_id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Unlinked",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
