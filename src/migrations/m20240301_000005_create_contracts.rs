//! Create `contracts`. Joins the company branch and the farmer branch: a
//! contract references both a farmer and a wholesaler.
//!
//! Status columns start out as native PostgreSQL enum types.
use sea_orm::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000005_create_contracts",
    parents: &[
        "m20240301_000003_create_wholesalers_and_centers",
        "m20240301_000004_create_farmers_and_retailers",
    ],
};

pub const CONTRACT_STATUS_TYPE: &str = "contract_status";
pub const PAYMENT_STATUS_TYPE: &str = "payment_status";

pub const CONTRACT_STATUSES: [&str; 6] = [
    "DRAFT",
    "PENDING",
    "APPROVED",
    "REJECTED",
    "CANCELLED",
    "COMPLETED",
];

pub const PAYMENT_STATUSES: [&str; 7] = [
    "UNPAID",
    "PARTIAL",
    "PREPARED",
    "OVERDUE",
    "PAID",
    "REFUNDED",
    "CANCELLED",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new(CONTRACT_STATUS_TYPE))
                    .values(CONTRACT_STATUSES.iter().map(|v| Alias::new(*v)))
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new(PAYMENT_STATUS_TYPE))
                    .values(PAYMENT_STATUSES.iter().map(|v| Alias::new(*v)))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(uuid(Contracts::Id).primary_key())
                    .col(uuid(Contracts::FarmerId))
                    .col(uuid_null(Contracts::WholesalerId))
                    .col(string_len(Contracts::CropName, 128))
                    .col(double(Contracts::Quantity))
                    .col(double(Contracts::UnitPrice))
                    .col(date_null(Contracts::DeliveryDate))
                    .col(
                        ColumnDef::new(Contracts::Status)
                            .custom(Alias::new(CONTRACT_STATUS_TYPE))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contracts::PaymentStatus)
                            .custom(Alias::new(PAYMENT_STATUS_TYPE))
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Contracts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Contracts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_farmer")
                            .from(Contracts::Table, Contracts::FarmerId)
                            .to(Farmers::Table, Farmers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_wholesaler")
                            .from(Contracts::Table, Contracts::WholesalerId)
                            .to(Wholesalers::Table, Wholesalers::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new(PAYMENT_STATUS_TYPE)).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new(CONTRACT_STATUS_TYPE)).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    FarmerId,
    WholesalerId,
    CropName,
    Quantity,
    UnitPrice,
    DeliveryDate,
    Status,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Farmers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Wholesalers {
    Table,
    Id,
}
