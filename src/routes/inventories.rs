use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::inventories::{
        CreateInventoryRequest, InventoryFilter, InventoryList, InventoryWithItems,
        UpdateInventoryRequest,
    },
    error::{AppError, AppResult},
    models::{Inventory, InventoryItem},
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::inventory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventories).post(create_inventory))
        .route(
            "/{id}",
            get(get_inventory)
                .put(update_inventory)
                .delete(delete_inventory),
        )
}

#[utoipa::path(
    get,
    path = "/api/inventories",
    params(PageParams, InventoryFilter),
    responses(
        (status = 200, description = "List inventory snapshots", body = ApiResponse<InventoryList>)
    ),
    tag = "Inventories"
)]
pub async fn list_inventories(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<InventoryFilter>,
) -> AppResult<Json<ApiResponse<InventoryList>>> {
    let (inventories, total) =
        inventory_service::list_inventories(&state.orm, &filter, page).await?;
    let data = InventoryList {
        items: inventories.into_iter().map(Inventory::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Inventories", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/inventories/{id}",
    params(
        ("id" = Uuid, Path, description = "Inventory ID")
    ),
    responses(
        (status = 200, description = "Snapshot with its items", body = ApiResponse<InventoryWithItems>),
        (status = 404, description = "Inventory not found"),
    ),
    tag = "Inventories"
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<InventoryWithItems>>> {
    let (inventory, items) = inventory_service::get_inventory_with_items(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let data = InventoryWithItems {
        inventory: Inventory::from(inventory),
        items: items.into_iter().map(InventoryItem::from).collect(),
    };
    Ok(Json(ApiResponse::success("Inventory", data, None)))
}

#[utoipa::path(
    post,
    path = "/api/inventories",
    request_body = CreateInventoryRequest,
    responses(
        (status = 200, description = "Create inventory snapshot", body = ApiResponse<Inventory>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Inventories"
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryRequest>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let inventory = inventory_service::create_inventory(&txn, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Inventory created",
        Inventory::from(inventory),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/inventories/{id}",
    params(
        ("id" = Uuid, Path, description = "Inventory ID")
    ),
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Updated inventory snapshot", body = ApiResponse<Inventory>),
        (status = 404, description = "Inventory not found"),
    ),
    tag = "Inventories"
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInventoryRequest>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let inventory = inventory_service::update_inventory(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Inventory::from(inventory),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/inventories/{id}",
    params(
        ("id" = Uuid, Path, description = "Inventory ID")
    ),
    responses(
        (status = 200, description = "Deleted inventory snapshot"),
        (status = 404, description = "Inventory not found"),
    ),
    tag = "Inventories"
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !inventory_service::delete_inventory(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
