mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use common::{send, token_for};

fn farmer_body(user_id: Option<Uuid>) -> Value {
    json!({
        "user_id": user_id,
        "name": "Tani Makmur",
        "address": "Desa Cikole, Lembang",
        "farm_size": 14.5,
        "annual_output": 310.0,
        "member_count": 27
    })
}

#[tokio::test]
async fn farmer_registration_uses_token_identity() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    let sari = common::create_user(&db, "sari@example.com", Some("idp|sari")).await?;
    let other = common::create_user(&db, "other@example.com", Some("idp|other")).await?;

    // The token wins over whatever user_id the payload names.
    let token = token_for("idp|sari");
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/farmers",
        Some(&token),
        Some(farmer_body(Some(other.id))),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Farmer created");
    assert_eq!(body["data"]["user_id"], sari.id.to_string());
    let farmer_id = body["data"]["id"].as_str().expect("id").to_string();

    let (status, body) = send(&app, Method::GET, &format!("/api/farmers/{farmer_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Tani Makmur");
    assert_eq!(body["data"]["member_count"], 27);
    Ok(())
}

#[tokio::test]
async fn second_registration_for_same_user_is_rejected() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    let sari = common::create_user(&db, "sari@example.com", Some("idp|sari")).await?;
    let token = token_for("idp|sari");

    let (status, _) = send(&app, Method::POST, "/api/farmers", Some(&token), Some(farmer_body(None))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/api/farmers", Some(&token), Some(farmer_body(None))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "Bad Request User is already registered as a farmer");

    // Same pre-check without a token.
    let (status, _) = send(&app, Method::POST, "/api/farmers", None, Some(farmer_body(Some(sari.id)))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let retailer = json!({ "name": "Segar Mart" });
    let (status, _) = send(&app, Method::POST, "/api/retailers", Some(&token), Some(retailer.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::POST, "/api/retailers", Some(&token), Some(retailer)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn registration_with_unknown_or_bad_token_is_unauthorized() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/farmers",
        Some(&token_for("idp|nobody")),
        Some(farmer_body(None)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/api/wholesalers", Some("garbage"), Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Farmers need an owner one way or the other.
    let (status, _) = send(&app, Method::POST, "/api/farmers", None, Some(farmer_body(None))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn owned_records_require_the_owners_token() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    common::create_user(&db, "sari@example.com", Some("idp|sari")).await?;
    common::create_user(&db, "budi@example.com", Some("idp|budi")).await?;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/farmers",
        Some(&token_for("idp|sari")),
        Some(farmer_body(None)),
    )
    .await;
    let uri = format!("/api/farmers/{}", body["data"]["id"].as_str().expect("id"));
    let patch = json!({ "member_count": 30 });

    let (status, _) = send(&app, Method::PUT, &uri, None, Some(patch.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::PUT, &uri, Some("garbage"), Some(patch.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::PUT, &uri, Some(&token_for("idp|budi")), Some(patch.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token_for("idp|budi")), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::PUT, &uri, Some(&token_for("idp|sari")), Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["member_count"], 30);
    assert_eq!(body["data"]["address"], "Desa Cikole, Lembang");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token_for("idp|sari")), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unowned_records_need_no_token() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);

    let (status, body) = send(&app, Method::POST, "/api/wholesalers", None, Some(json!({ "name": "Open Desk" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["user_id"].is_null());
    let uri = format!("/api/wholesalers/{}", body["data"]["id"].as_str().expect("id"));

    let (status, body) = send(&app, Method::PUT, &uri, None, Some(json!({ "phone": "+62 22 1" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["phone"], "+62 22 1");
    assert_eq!(body["data"]["name"], "Open Desk");
    Ok(())
}

#[tokio::test]
async fn missing_rows_are_not_found() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    let missing = Uuid::new_v4();

    for path in ["users", "companies", "wholesalers", "centers", "farmers", "retailers", "contracts", "inventories", "inventory-items"] {
        let uri = format!("/api/{path}/{missing}");
        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert_eq!(body["message"], "Not Found");
        let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
    }

    let (status, _) = send(&app, Method::PUT, &format!("/api/contracts/{missing}"), None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_payloads_and_duplicate_emails() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({ "email": "not-an-email", "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["details"]["email"].is_array());
    assert!(body["data"]["details"]["name"].is_array());

    let user = json!({ "email": "sari@example.com", "name": "Sari" });
    let (status, _) = send(&app, Method::POST, "/api/users", None, Some(user.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::POST, "/api/users", None, Some(user)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Conflict");
    Ok(())
}

#[tokio::test]
async fn list_endpoints_filter_and_report_meta() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    for (email, name) in [("ana@example.com", "Ana"), ("anton@example.com", "Anton"), ("bayu@example.com", "Bayu")] {
        let (status, _) = send(&app, Method::POST, "/api/users", None, Some(json!({ "email": email, "name": name }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/api/users?name=AN&skip=1&limit=5", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["skip"], 1);
    assert_eq!(body["meta"]["limit"], 5);
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(1));

    let (_, body) = send(&app, Method::GET, "/api/users", None, None).await;
    assert_eq!(body["meta"]["skip"], 0);
    assert!(body["meta"]["limit"].is_null());
    assert_eq!(body["meta"]["total"], 3);

    let (_, body) = send(&app, Method::GET, "/api/users/by-external-id/idp%7Cnone", None, None).await;
    assert_eq!(body["message"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn centers_link_wholesalers_and_inventories_embed_items() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    let owner = common::create_user(&db, "owner@example.com", None).await?;

    let (_, company) = send(
        &app,
        Method::POST,
        "/api/companies",
        None,
        Some(json!({ "owner_id": owner.id, "name": "Agro Nusantara" })),
    )
    .await;
    let company_id = company["data"]["id"].as_str().expect("company id").to_string();

    let (status, center) = send(
        &app,
        Method::POST,
        "/api/centers",
        None,
        Some(json!({ "company_id": company_id, "name": "Lembang Hub", "capacity": 800.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{center}");
    let center_id = center["data"]["id"].as_str().expect("center id").to_string();

    let (_, wholesaler) = send(
        &app,
        Method::POST,
        "/api/wholesalers",
        None,
        Some(json!({ "name": "Grain Desk", "company_id": company_id })),
    )
    .await;
    let wholesaler_id = wholesaler["data"]["id"].as_str().expect("wholesaler id").to_string();

    let link = format!("/api/centers/{center_id}/wholesalers/{wholesaler_id}");
    for _ in 0..2 {
        let (status, _) = send(&app, Method::POST, &link, None, None).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, linked) = send(&app, Method::GET, &format!("/api/centers/{center_id}/wholesalers"), None, None).await;
    assert_eq!(linked["data"]["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(linked["data"]["items"][0]["id"], wholesaler_id.as_str());

    let (status, _) = send(&app, Method::DELETE, &link, None, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &link, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, inventory) = send(
        &app,
        Method::POST,
        "/api/inventories",
        None,
        Some(json!({ "center_id": center_id, "snapshot_date": "2024-05-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{inventory}");
    let inventory_id = inventory["data"]["id"].as_str().expect("inventory id").to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/inventory-items",
        None,
        Some(json!({ "inventory_id": inventory_id, "crop_name": "Potato", "quality_grade": "A", "quantity": 120.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &format!("/api/inventories/{inventory_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["inventory"]["snapshot_date"], "2024-05-31");
    assert_eq!(body["data"]["items"][0]["crop_name"], "Potato");

    let (_, items) = send(&app, Method::GET, "/api/inventory-items?quality_grade=a&quantity_min=100", None, None).await;
    assert_eq!(items["meta"]["total"], 1);
    Ok(())
}

#[tokio::test]
async fn contract_status_round_trips_as_screaming_strings() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let app = common::app(&db);
    let user = common::create_user(&db, "sari@example.com", Some("idp|sari")).await?;
    let (_, farmer) = send(&app, Method::POST, "/api/farmers", None, Some(farmer_body(Some(user.id)))).await;
    let farmer_id = farmer["data"]["id"].as_str().expect("farmer id").to_string();

    let (status, contract) = send(
        &app,
        Method::POST,
        "/api/contracts",
        None,
        Some(json!({ "farmer_id": farmer_id, "crop_name": "Potato", "quantity": 40.0, "unit_price": 9500.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{contract}");
    assert_eq!(contract["data"]["status"], "DRAFT");
    assert_eq!(contract["data"]["payment_status"], "UNPAID");

    let uri = format!("/api/contracts/{}", contract["data"]["id"].as_str().expect("id"));
    let (_, updated) = send(&app, Method::PUT, &uri, None, Some(json!({ "status": "APPROVED" }))).await;
    assert_eq!(updated["data"]["status"], "APPROVED");
    assert_eq!(updated["data"]["crop_name"], "Potato");

    let (_, approved) = send(&app, Method::GET, "/api/contracts?status=APPROVED", None, None).await;
    assert_eq!(approved["meta"]["total"], 1);
    let (_, pending) = send(&app, Method::GET, "/api/contracts?status=PENDING", None, None).await;
    assert_eq!(pending["meta"]["total"], 0);

    let (_, of_farmer) = send(&app, Method::GET, &format!("/api/farmers/{farmer_id}/contracts"), None, None).await;
    assert_eq!(of_farmer["data"]["items"].as_array().map(Vec::len), Some(1));
    Ok(())
}
