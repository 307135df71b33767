mod common;

use chrono::NaiveDate;
use uuid::Uuid;

use agri_market_api::{
    dto::{
        centers::CreateCenterRequest,
        companies::CreateCompanyRequest,
        contracts::{ContractFilter, CreateContractRequest, UpdateContractRequest},
        farmers::{CreateFarmerRequest, FarmerFilter, UpdateFarmerRequest},
        inventories::{CreateInventoryItemRequest, CreateInventoryRequest},
        users::{UpdateUserRequest, UserFilter},
        wholesalers::CreateWholesalerRequest,
    },
    entity::contracts::{ContractStatus, PaymentStatus},
    routes::params::PageParams,
    services::{
        center_service, company_service, contract_service, farmer_service, inventory_service,
        user_service, wholesaler_service,
    },
};

fn farmer_payload(name: &str, address: &str, farm_size: f64, members: i32) -> CreateFarmerRequest {
    CreateFarmerRequest {
        user_id: None,
        name: name.to_string(),
        address: address.to_string(),
        farm_size,
        annual_output: farm_size * 20.0,
        member_count: members,
    }
}

#[tokio::test]
async fn create_then_get_returns_stored_farmer() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let user = common::create_user(&db, "sari@example.com", Some("idp|sari")).await?;

    let created = farmer_service::create_farmer(
        &db,
        user.id,
        farmer_payload("Tani Makmur", "Lembang", 12.5, 8),
    )
    .await?;
    let fetched = farmer_service::get_farmer(&db, created.id)
        .await?
        .expect("farmer exists");

    assert_eq!(fetched, created);
    assert_eq!(fetched.user_id, user.id);
    assert_eq!(fetched.name, "Tani Makmur");
    assert_eq!(fetched.farm_size, 12.5);
    assert_eq!(fetched.member_count, 8);
    assert_eq!(fetched.created_at, fetched.updated_at);
    Ok(())
}

#[tokio::test]
async fn partial_update_leaves_omitted_fields() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let user = common::create_user(&db, "budi@example.com", None).await?;
    let farmer = farmer_service::create_farmer(
        &db,
        user.id,
        farmer_payload("Sumber Rejeki", "Garut", 4.0, 3),
    )
    .await?;

    let updated = farmer_service::update_farmer(
        &db,
        farmer.id,
        UpdateFarmerRequest {
            member_count: Some(5),
            ..Default::default()
        },
    )
    .await?
    .expect("farmer exists");

    assert_eq!(updated.member_count, 5);
    assert_eq!(updated.name, farmer.name);
    assert_eq!(updated.address, farmer.address);
    assert_eq!(updated.farm_size, farmer.farm_size);
    assert_eq!(updated.annual_output, farmer.annual_output);
    assert_eq!(updated.created_at, farmer.created_at);
    assert!(updated.updated_at >= farmer.updated_at);

    let user = user_service::update_user(
        &db,
        user.id,
        UpdateUserRequest {
            phone: Some("+62 811 000".into()),
            ..Default::default()
        },
    )
    .await?
    .expect("user exists");
    assert_eq!(user.phone.as_deref(), Some("+62 811 000"));
    assert_eq!(user.email, "budi@example.com");
    Ok(())
}

#[tokio::test]
async fn update_of_missing_row_is_none() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let result =
        farmer_service::update_farmer(&db, Uuid::new_v4(), UpdateFarmerRequest::default()).await?;
    assert!(result.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let user = common::create_user(&db, "dewi@example.com", None).await?;
    let farmer =
        farmer_service::create_farmer(&db, user.id, farmer_payload("Dewi Farm", "Subang", 2.0, 1))
            .await?;

    assert!(farmer_service::delete_farmer(&db, farmer.id).await?);
    assert!(farmer_service::get_farmer(&db, farmer.id).await?.is_none());
    assert!(!farmer_service::delete_farmer(&db, farmer.id).await?);
    assert!(!farmer_service::delete_farmer(&db, Uuid::new_v4()).await?);
    Ok(())
}

#[tokio::test]
async fn filters_are_a_conjunction() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let rows = [
        ("Green Valley", "North Ridge", 10.0, 4),
        ("Green Hills", "South Plain", 3.0, 2),
        ("Blue River", "North Ridge", 2.0, 9),
    ];
    for (i, (name, address, size, members)) in rows.into_iter().enumerate() {
        let user = common::create_user(&db, &format!("farmer{i}@example.com"), None).await?;
        farmer_service::create_farmer(&db, user.id, farmer_payload(name, address, size, members))
            .await?;
    }

    let names = |filter: FarmerFilter| {
        let db = db.clone();
        async move {
            let (items, total) =
                farmer_service::list_farmers(&db, &filter, PageParams::default()).await?;
            assert_eq!(total as usize, items.len());
            let mut names: Vec<String> = items.into_iter().map(|f| f.name).collect();
            names.sort();
            anyhow::Ok(names)
        }
    };

    let by_name = names(FarmerFilter {
        name: Some("green".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(by_name, ["Green Hills", "Green Valley"]);

    let by_address = names(FarmerFilter {
        address: Some("NORTH".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(by_address, ["Blue River", "Green Valley"]);

    let both = names(FarmerFilter {
        name: Some("green".into()),
        address: Some("NORTH".into()),
        ..Default::default()
    })
    .await?;
    assert_eq!(both, ["Green Valley"]);

    let bounded = names(FarmerFilter {
        farm_size_min: Some(2.0),
        farm_size_max: Some(3.0),
        member_count_max: Some(4),
        ..Default::default()
    })
    .await?;
    assert_eq!(bounded, ["Green Hills"]);

    let empty_text_ignored = names(FarmerFilter {
        name: Some(String::new()),
        ..Default::default()
    })
    .await?;
    assert_eq!(empty_text_ignored.len(), 3);
    Ok(())
}

#[tokio::test]
async fn like_wildcards_match_literally() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    common::create_user(&db, "a_b@example.com", None).await?;
    common::create_user(&db, "axb@example.com", None).await?;

    let (users, total) = user_service::list_users(
        &db,
        &UserFilter {
            email: Some("a_b".into()),
            ..Default::default()
        },
        PageParams::default(),
    )
    .await?;
    assert_eq!(total, 1);
    assert_eq!(users[0].email, "a_b@example.com");
    Ok(())
}

#[tokio::test]
async fn pagination_windows_rows_and_counts_all_matches() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    for i in 0..5 {
        common::create_user(&db, &format!("user{i}@example.com"), None).await?;
    }

    let filter = UserFilter::default();
    let (page, total) = user_service::list_users(&db, &filter, PageParams::new(1, Some(2))).await?;
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    let (rest, _) = user_service::list_users(&db, &filter, PageParams::new(3, None)).await?;
    assert_eq!(rest.len(), 2);

    let (none, total) = user_service::list_users(&db, &filter, PageParams::new(10, None)).await?;
    assert!(none.is_empty());
    assert_eq!(total, 5);
    Ok(())
}

#[tokio::test]
async fn contracts_default_status_and_accept_any_transition() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let user = common::create_user(&db, "coop@example.com", None).await?;
    let farmer =
        farmer_service::create_farmer(&db, user.id, farmer_payload("Coop", "Bogor", 6.0, 12))
            .await?;

    let draft = contract_service::create_contract(
        &db,
        CreateContractRequest {
            farmer_id: farmer.id,
            wholesaler_id: None,
            crop_name: "Shallot".into(),
            quantity: 20.0,
            unit_price: 18_000.0,
            delivery_date: NaiveDate::from_ymd_opt(2024, 7, 15),
            status: None,
            payment_status: None,
        },
    )
    .await?;
    assert_eq!(draft.status, ContractStatus::Draft);
    assert_eq!(draft.payment_status, PaymentStatus::Unpaid);

    let completed = contract_service::update_contract(
        &db,
        draft.id,
        UpdateContractRequest {
            status: Some(ContractStatus::Completed),
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        },
    )
    .await?
    .expect("contract exists");
    assert_eq!(completed.status, ContractStatus::Completed);

    let reopened = contract_service::update_contract(
        &db,
        draft.id,
        UpdateContractRequest {
            status: Some(ContractStatus::Draft),
            ..Default::default()
        },
    )
    .await?
    .expect("contract exists");
    assert_eq!(reopened.status, ContractStatus::Draft);
    assert_eq!(reopened.payment_status, PaymentStatus::Paid);
    assert_eq!(reopened.crop_name, "Shallot");

    let (july, _) = contract_service::list_contracts(
        &db,
        &ContractFilter {
            delivery_from: NaiveDate::from_ymd_opt(2024, 7, 1),
            delivery_to: NaiveDate::from_ymd_opt(2024, 7, 31),
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        },
        PageParams::default(),
    )
    .await?;
    assert_eq!(july.len(), 1);

    let contracts = farmer_service::list_contracts(&db, farmer.id)
        .await?
        .expect("farmer exists");
    assert_eq!(contracts.len(), 1);
    assert!(farmer_service::list_contracts(&db, Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn center_wholesaler_links_are_idempotent() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let owner = common::create_user(&db, "owner@example.com", None).await?;
    let company = company_service::create_company(
        &db,
        CreateCompanyRequest {
            owner_id: owner.id,
            name: "Agro Nusantara".into(),
            registration_number: None,
            address: None,
        },
    )
    .await?;
    let center = center_service::create_center(
        &db,
        CreateCenterRequest {
            company_id: company.id,
            name: "Cikarang Hub".into(),
            address: None,
            capacity: Some(500.0),
        },
    )
    .await?;
    let wholesaler = wholesaler_service::create_wholesaler(
        &db,
        None,
        CreateWholesalerRequest {
            user_id: None,
            company_id: Some(company.id),
            name: "Grain Desk".into(),
            address: None,
            phone: None,
        },
    )
    .await?;

    assert!(center_service::link_wholesaler(&db, center.id, wholesaler.id).await?);
    assert!(center_service::link_wholesaler(&db, center.id, wholesaler.id).await?);
    let linked = center_service::list_wholesalers(&db, center.id)
        .await?
        .expect("center exists");
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, wholesaler.id);

    assert!(!center_service::link_wholesaler(&db, center.id, Uuid::new_v4()).await?);

    assert!(center_service::unlink_wholesaler(&db, center.id, wholesaler.id).await?);
    assert!(!center_service::unlink_wholesaler(&db, center.id, wholesaler.id).await?);
    let linked = center_service::list_wholesalers(&db, center.id)
        .await?
        .expect("center exists");
    assert!(linked.is_empty());
    Ok(())
}

#[tokio::test]
async fn inventory_snapshot_loads_its_items() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let owner = common::create_user(&db, "owner@example.com", None).await?;
    let company = company_service::create_company(
        &db,
        CreateCompanyRequest {
            owner_id: owner.id,
            name: "Agro Nusantara".into(),
            registration_number: None,
            address: None,
        },
    )
    .await?;
    let center = center_service::create_center(
        &db,
        CreateCenterRequest {
            company_id: company.id,
            name: "Cikarang Hub".into(),
            address: None,
            capacity: None,
        },
    )
    .await?;
    let inventory = inventory_service::create_inventory(
        &db,
        CreateInventoryRequest {
            center_id: center.id,
            snapshot_date: NaiveDate::from_ymd_opt(2024, 5, 31).expect("date"),
            note: None,
        },
    )
    .await?;
    for (grade, quantity) in [("A", 10.0), ("B", 4.5)] {
        inventory_service::create_item(
            &db,
            CreateInventoryItemRequest {
                inventory_id: inventory.id,
                crop_name: "Potato".into(),
                quality_grade: grade.into(),
                quantity,
            },
        )
        .await?;
    }

    let (snapshot, items) = inventory_service::get_inventory_with_items(&db, inventory.id)
        .await?
        .expect("inventory exists");
    assert_eq!(snapshot.id, inventory.id);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.inventory_id == inventory.id));
    Ok(())
}
