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
        CreateInventoryItemRequest, InventoryItemFilter, InventoryItemList,
        UpdateInventoryItemRequest,
    },
    error::{AppError, AppResult},
    models::InventoryItem,
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::inventory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}

#[utoipa::path(
    get,
    path = "/api/inventory-items",
    params(PageParams, InventoryItemFilter),
    responses(
        (status = 200, description = "List inventory items", body = ApiResponse<InventoryItemList>)
    ),
    tag = "Inventory Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<InventoryItemFilter>,
) -> AppResult<Json<ApiResponse<InventoryItemList>>> {
    let (items, total) = inventory_service::list_items(&state.orm, &filter, page).await?;
    let data = InventoryItemList {
        items: items.into_iter().map(InventoryItem::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Inventory items", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/inventory-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Get inventory item", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Inventory item not found"),
    ),
    tag = "Inventory Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let item = inventory_service::get_item(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success(
        "Inventory item",
        InventoryItem::from(item),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/inventory-items",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 200, description = "Create inventory item", body = ApiResponse<InventoryItem>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Inventory Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryItemRequest>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let item = inventory_service::create_item(&txn, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Inventory item created",
        InventoryItem::from(item),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/inventory-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Inventory item ID")
    ),
    request_body = UpdateInventoryItemRequest,
    responses(
        (status = 200, description = "Updated inventory item", body = ApiResponse<InventoryItem>),
        (status = 404, description = "Inventory item not found"),
    ),
    tag = "Inventory Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInventoryItemRequest>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let item = inventory_service::update_item(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        InventoryItem::from(item),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/inventory-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Deleted inventory item"),
        (status = 404, description = "Inventory item not found"),
    ),
    tag = "Inventory Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !inventory_service::delete_item(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
