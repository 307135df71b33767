#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use serde_json::Value;
use tower::ServiceExt;

use agri_market_api::{
    dto::users::CreateUserRequest,
    entity::{
        CenterWholesalers, Centers, Companies, Contracts, Farmers, Inventories, InventoryItems,
        Retailers, Users, Wholesalers, users,
    },
    error::{AppError, AppResult},
    middleware::auth::TokenVerifier,
    routes::create_app,
    services::user_service,
    state::AppState,
};

/// Accepts `valid:<subject>` and returns `<subject>`; everything else is rejected.
pub struct FakeVerifier;

impl TokenVerifier for FakeVerifier {
    fn verify(&self, token: &str) -> AppResult<String> {
        token
            .strip_prefix("valid:")
            .map(str::to_string)
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))
    }
}

pub fn token_for(subject: &str) -> String {
    format!("valid:{subject}")
}

/// Fresh in-memory database with the schema derived from the entities.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    create_table(&db, &schema, Users).await?;
    create_table(&db, &schema, Companies).await?;
    create_table(&db, &schema, Wholesalers).await?;
    create_table(&db, &schema, Centers).await?;
    create_table(&db, &schema, CenterWholesalers).await?;
    create_table(&db, &schema, Farmers).await?;
    create_table(&db, &schema, Retailers).await?;
    create_table(&db, &schema, Contracts).await?;
    create_table(&db, &schema, Inventories).await?;
    create_table(&db, &schema, InventoryItems).await?;
    Ok(db)
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    db.execute(backend.build(&schema.create_table_from_entity(entity)))
        .await?;
    Ok(())
}

pub fn app(db: &DatabaseConnection) -> Router {
    create_app(AppState {
        orm: db.clone(),
        verifier: Arc::new(FakeVerifier),
    })
}

pub async fn create_user(
    db: &DatabaseConnection,
    email: &str,
    external_id: Option<&str>,
) -> anyhow::Result<users::Model> {
    let user = user_service::create_user(
        db,
        CreateUserRequest {
            email: email.to_string(),
            external_id: external_id.map(str::to_string),
            name: email.split('@').next().unwrap_or(email).to_string(),
            phone: None,
        },
    )
    .await?;
    Ok(user)
}

/// Sends one request through the full router and returns the status and JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
