use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::companies::{CompanyFilter, CompanyList, CreateCompanyRequest, UpdateCompanyRequest},
    error::{AppError, AppResult},
    models::Company,
    response::{ApiResponse, Meta},
    routes::params::PageParams,
    services::company_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

#[utoipa::path(
    get,
    path = "/api/companies",
    params(PageParams, CompanyFilter),
    responses(
        (status = 200, description = "List companies", body = ApiResponse<CompanyList>)
    ),
    tag = "Companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<CompanyFilter>,
) -> AppResult<Json<ApiResponse<CompanyList>>> {
    let (companies, total) = company_service::list_companies(&state.orm, &filter, page).await?;
    let data = CompanyList {
        items: companies.into_iter().map(Company::from).collect(),
    };
    let meta = Meta::new(page.skip(), page.limit, total);
    Ok(Json(ApiResponse::success("Companies", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Get company", body = ApiResponse<Company>),
        (status = 404, description = "Company not found"),
    ),
    tag = "Companies"
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let company = company_service::get_company(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Company", Company::from(company), None)))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 200, description = "Create company", body = ApiResponse<Company>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Companies"
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> AppResult<Json<ApiResponse<Company>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let company = company_service::create_company(&txn, payload).await?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Company created",
        Company::from(company),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Updated company", body = ApiResponse<Company>),
        (status = 404, description = "Company not found"),
    ),
    tag = "Companies"
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> AppResult<Json<ApiResponse<Company>>> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    let company = company_service::update_company(&txn, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        Company::from(company),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Deleted company"),
        (status = 404, description = "Company not found"),
    ),
    tag = "Companies"
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let txn = state.orm.begin().await?;
    if !company_service::delete_company(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
