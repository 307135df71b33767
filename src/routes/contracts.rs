use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::contracts::{ContractFilter, ContractList, CreateContractRequest, UpdateContractRequest},
    error::{AppError, AppResult},
    models::Contract,
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::contract_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contracts).post(create_contract))
        .route(
            "/{id}",
            get(get_contract).put(update_contract).delete(delete_contract),
        )
}

#[utoipa::path(
    get,
    path = "/api/contracts",
    params(PageParams, ContractFilter),
    responses(
        (status = 200, description = "List contracts", body = ApiResponse<ContractList>)
    ),
    tag = "Contracts"
)]
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<ContractFilter>,
) -> AppResult<Json<ApiResponse<ContractList>>> {
    let (contracts, total) = contract_service::list_contracts(&state.orm, &filter, page).await?;
    let data = ContractList {
        items: contracts.into_iter().map(Contract::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Contracts", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/contracts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contract ID")
    ),
    responses(
        (status = 200, description = "Get contract", body = ApiResponse<Contract>),
        (status = 404, description = "Contract not found"),
    ),
    tag = "Contracts"
)]
pub async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Contract>>> {
    let contract = contract_service::get_contract(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Contract", Contract::from(contract), None)))
}

#[utoipa::path(
    post,
    path = "/api/contracts",
    request_body = CreateContractRequest,
    responses(
        (status = 200, description = "Create contract", body = ApiResponse<Contract>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Contracts"
)]
pub async fn create_contract(
    State(state): State<AppState>,
    Json(payload): Json<CreateContractRequest>,
) -> AppResult<Json<ApiResponse<Contract>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let contract = contract_service::create_contract(&txn, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Contract created",
        Contract::from(contract),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/contracts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contract ID")
    ),
    request_body = UpdateContractRequest,
    responses(
        (status = 200, description = "Updated contract", body = ApiResponse<Contract>),
        (status = 404, description = "Contract not found"),
    ),
    tag = "Contracts"
)]
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateContractRequest>,
) -> AppResult<Json<ApiResponse<Contract>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let contract = contract_service::update_contract(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Contract::from(contract),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/contracts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contract ID")
    ),
    responses(
        (status = 200, description = "Deleted contract"),
        (status = 404, description = "Contract not found"),
    ),
    tag = "Contracts"
)]
pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !contract_service::delete_contract(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
