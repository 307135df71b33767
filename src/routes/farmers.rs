use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        contracts::ContractList,
        farmers::{CreateFarmerRequest, FarmerFilter, FarmerList, UpdateFarmerRequest},
    },
    error::{AppError, AppResult},
    middleware::auth::{BearerToken, creation_owner, ensure_owner},
    models::{Contract, Farmer},
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::farmer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_farmers).post(create_farmer))
        .route(
            "/{id}",
            get(get_farmer).put(update_farmer).delete(delete_farmer),
        )
        .route("/{id}/contracts", get(list_farmer_contracts))
}

#[utoipa::path(
    get,
    path = "/api/farmers",
    params(PageParams, FarmerFilter),
    responses(
        (status = 200, description = "List farmers", body = ApiResponse<FarmerList>)
    ),
    tag = "Farmers"
)]
pub async fn list_farmers(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<FarmerFilter>,
) -> AppResult<Json<ApiResponse<FarmerList>>> {
    let (farmers, total) = farmer_service::list_farmers(&state.orm, &filter, page).await?;
    let data = FarmerList {
        items: farmers.into_iter().map(Farmer::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Farmers", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/farmers/{id}",
    params(
        ("id" = Uuid, Path, description = "Farmer ID")
    ),
    responses(
        (status = 200, description = "Get farmer", body = ApiResponse<Farmer>),
        (status = 404, description = "Farmer not found"),
    ),
    tag = "Farmers"
)]
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Farmer>>> {
    let farmer = farmer_service::get_farmer(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Farmer", Farmer::from(farmer), None)))
}

#[utoipa::path(
    get,
    path = "/api/farmers/{id}/contracts",
    params(
        ("id" = Uuid, Path, description = "Farmer ID")
    ),
    responses(
        (status = 200, description = "Contracts of the farmer", body = ApiResponse<ContractList>),
        (status = 404, description = "Farmer not found"),
    ),
    tag = "Farmers"
)]
pub async fn list_farmer_contracts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ContractList>>> {
    let contracts = farmer_service::list_contracts(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let total = contracts.len() as u64;
    let data = ContractList {
        items: contracts.into_iter().map(Contract::from).collect(),
    };
    Ok(Json(ApiResponse::success(
        "Farmer contracts",
        data,
        Some(Meta::new(0, None, total)),
    )))
}

#[utoipa::path(
    post,
    path = "/api/farmers",
    request_body = CreateFarmerRequest,
    responses(
        (status = 200, description = "Create farmer", body = ApiResponse<Farmer>),
        (status = 400, description = "Invalid payload or user already registered as a farmer"),
        (status = 401, description = "Invalid token or unknown identity"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Farmers"
)]
pub async fn create_farmer(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateFarmerRequest>,
) -> AppResult<Json<ApiResponse<Farmer>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let owner = creation_owner(
        &txn,
        state.verifier.as_ref(),
        token.as_deref(),
        payload.user_id,
    )
    .await?
    .ok_or_else(|| AppError::BadRequest("user_id is required".into()))?;

    if farmer_service::find_by_user(&txn, owner).await?.is_some() {
        return Err(AppError::BadRequest(
            "User is already registered as a farmer".into(),
        ));
    }

    let farmer = farmer_service::create_farmer(&txn, owner, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Farmer created",
        Farmer::from(farmer),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/farmers/{id}",
    params(
        ("id" = Uuid, Path, description = "Farmer ID")
    ),
    request_body = UpdateFarmerRequest,
    responses(
        (status = 200, description = "Updated farmer", body = ApiResponse<Farmer>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token does not belong to the owner"),
        (status = 404, description = "Farmer not found"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Farmers"
)]
pub async fn update_farmer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    token: BearerToken,
    Json(payload): Json<UpdateFarmerRequest>,
) -> AppResult<Json<ApiResponse<Farmer>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let existing = farmer_service::get_farmer(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(
        &txn,
        state.verifier.as_ref(),
        token.as_deref(),
        Some(existing.user_id),
    )
    .await?;

    let farmer = farmer_service::update_farmer(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Farmer::from(farmer),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/farmers/{id}",
    params(
        ("id" = Uuid, Path, description = "Farmer ID")
    ),
    responses(
        (status = 200, description = "Deleted farmer"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token does not belong to the owner"),
        (status = 404, description = "Farmer not found"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Farmers"
)]
pub async fn delete_farmer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    token: BearerToken,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    let existing = farmer_service::get_farmer(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(
        &txn,
        state.verifier.as_ref(),
        token.as_deref(),
        Some(existing.user_id),
    )
    .await?;

    if !farmer_service::delete_farmer(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
