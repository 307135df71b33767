use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use sea_orm_migration::MigratorTrait;

use agri_market_api::{
    config::AppConfig,
    db::create_orm_conn,
    dto::{
        centers::CreateCenterRequest,
        companies::CreateCompanyRequest,
        contracts::CreateContractRequest,
        farmers::CreateFarmerRequest,
        inventories::{CreateInventoryItemRequest, CreateInventoryRequest},
        retailers::CreateRetailerRequest,
        users::CreateUserRequest,
        wholesalers::CreateWholesalerRequest,
    },
    entity::{contracts::ContractStatus, users},
    migrations::Migrator,
    services::{
        center_service, company_service, contract_service, farmer_service, inventory_service,
        retailer_service, user_service, wholesaler_service,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    Migrator::up(&orm, None).await?;

    if user_service::find_by_external_id(&orm, "seed|farmer").await?.is_some() {
        println!("Seed data already present, nothing to do");
        return Ok(());
    }

    seed(&orm).await?;
    println!("Seed completed");
    Ok(())
}

async fn seed(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let txn = orm.begin().await?;

    let farmer_user = ensure_user(&txn, "farmer@example.com", "seed|farmer", "Sari Wulandari").await?;
    let wholesaler_user =
        ensure_user(&txn, "wholesaler@example.com", "seed|wholesaler", "Budi Santoso").await?;
    let retailer_user = ensure_user(&txn, "retailer@example.com", "seed|retailer", "Dewi Lestari").await?;

    let company = company_service::create_company(
        &txn,
        CreateCompanyRequest {
            owner_id: wholesaler_user.id,
            name: "Nusantara Agro Trading".into(),
            registration_number: Some("NAT-2024-001".into()),
            address: Some("Jl. Pasar Induk 12, Bandung".into()),
        },
    )
    .await?;

    let wholesaler = wholesaler_service::create_wholesaler(
        &txn,
        Some(wholesaler_user.id),
        CreateWholesalerRequest {
            user_id: None,
            company_id: Some(company.id),
            name: "Nusantara Grain Desk".into(),
            address: Some("Jl. Pasar Induk 12, Bandung".into()),
            phone: Some("+62 22 555 0101".into()),
        },
    )
    .await?;

    let center = center_service::create_center(
        &txn,
        CreateCenterRequest {
            company_id: company.id,
            name: "Lembang Cold Storage".into(),
            address: Some("Jl. Raya Lembang 88".into()),
            capacity: Some(1200.0),
        },
    )
    .await?;
    center_service::link_wholesaler(&txn, center.id, wholesaler.id).await?;

    let farmer = farmer_service::create_farmer(
        &txn,
        farmer_user.id,
        CreateFarmerRequest {
            user_id: None,
            name: "Tani Makmur Cooperative".into(),
            address: "Desa Cikole, Lembang".into(),
            farm_size: 14.5,
            annual_output: 310.0,
            member_count: 27,
        },
    )
    .await?;

    retailer_service::create_retailer(
        &txn,
        Some(retailer_user.id),
        CreateRetailerRequest {
            user_id: None,
            name: "Segar Fresh Mart".into(),
            address: Some("Jl. Dago 45, Bandung".into()),
            store_type: Some("supermarket".into()),
        },
    )
    .await?;

    let contracts = [
        ("Potato", 40.0, 9_500.0, ContractStatus::Approved),
        ("Cabbage", 25.0, 4_200.0, ContractStatus::Pending),
        ("Carrot", 18.0, 7_800.0, ContractStatus::Draft),
    ];
    for (crop, quantity, unit_price, status) in contracts {
        contract_service::create_contract(
            &txn,
            CreateContractRequest {
                farmer_id: farmer.id,
                wholesaler_id: Some(wholesaler.id),
                crop_name: crop.into(),
                quantity,
                unit_price,
                delivery_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                status: Some(status),
                payment_status: None,
            },
        )
        .await?;
    }

    let inventory = inventory_service::create_inventory(
        &txn,
        CreateInventoryRequest {
            center_id: center.id,
            snapshot_date: NaiveDate::from_ymd_opt(2024, 5, 31)
                .ok_or_else(|| anyhow::anyhow!("invalid snapshot date"))?,
            note: Some("End of month count".into()),
        },
    )
    .await?;

    for (crop, grade, quantity) in [("Potato", "A", 120.0), ("Potato", "B", 45.5), ("Carrot", "A", 60.0)] {
        inventory_service::create_item(
            &txn,
            CreateInventoryItemRequest {
                inventory_id: inventory.id,
                crop_name: crop.into(),
                quality_grade: grade.into(),
                quantity,
            },
        )
        .await?;
    }

    txn.commit().await?;
    println!("Seeded company, center, farmer, wholesaler, retailer, contracts and inventory");
    Ok(())
}

async fn ensure_user<C: sea_orm::ConnectionTrait>(
    db: &C,
    email: &str,
    external_id: &str,
    name: &str,
) -> anyhow::Result<users::Model> {
    if let Some(existing) = user_service::find_by_external_id(db, external_id).await? {
        return Ok(existing);
    }
    let user = user_service::create_user(
        db,
        CreateUserRequest {
            email: email.into(),
            external_id: Some(external_id.into()),
            name: name.into(),
            phone: None,
        },
    )
    .await?;
    println!("Ensured user {email} (external_id={external_id})");
    Ok(user)
}
