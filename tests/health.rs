mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn health_check_reports_database_up() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);

    let (status, body) = common::send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Agri market health");
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "up");
    Ok(())
}

#[tokio::test]
async fn health_check_degrades_when_pool_is_closed() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    db.close().await?;

    let (status, body) = common::send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["database"], "down");
    Ok(())
}

#[tokio::test]
async fn unknown_path_is_wrapped_not_found() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);

    let (status, body) = common::send(&app, Method::GET, "/api/nowhere", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["path"], "/api/nowhere");
    Ok(())
}
