//! Create `inventories` (dated snapshots per center) and their line items.
use sea_orm_migration::{prelude::*, schema::*};

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000006_create_inventories",
    parents: &["m20240301_000005_create_contracts"],
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventories::Table)
                    .if_not_exists()
                    .col(uuid(Inventories::Id).primary_key())
                    .col(uuid(Inventories::CenterId))
                    .col(date(Inventories::SnapshotDate))
                    .col(text_null(Inventories::Note))
                    .col(
                        timestamp_with_time_zone(Inventories::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Inventories::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventories_center")
                            .from(Inventories::Table, Inventories::CenterId)
                            .to(Centers::Table, Centers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(uuid(InventoryItems::Id).primary_key())
                    .col(uuid(InventoryItems::InventoryId))
                    .col(string_len(InventoryItems::CropName, 128))
                    .col(string_len(InventoryItems::QualityGrade, 16))
                    .col(double(InventoryItems::Quantity))
                    .col(
                        timestamp_with_time_zone(InventoryItems::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(InventoryItems::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_items_inventory")
                            .from(InventoryItems::Table, InventoryItems::InventoryId)
                            .to(Inventories::Table, Inventories::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inventories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inventories {
    Table,
    Id,
    CenterId,
    SnapshotDate,
    Note,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
    InventoryId,
    CropName,
    QualityGrade,
    Quantity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Centers {
    Table,
    Id,
}
