//! Create `wholesalers`, `centers` and the `center_wholesalers` join table.
use sea_orm_migration::{prelude::*, schema::*};

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000003_create_wholesalers_and_centers",
    parents: &["m20240301_000002_create_companies"],
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wholesalers::Table)
                    .if_not_exists()
                    .col(uuid(Wholesalers::Id).primary_key())
                    .col(uuid_null(Wholesalers::UserId).unique_key())
                    .col(uuid_null(Wholesalers::CompanyId))
                    .col(string_len(Wholesalers::Name, 255))
                    .col(string_len_null(Wholesalers::Address, 512))
                    .col(string_len_null(Wholesalers::Phone, 32))
                    .col(
                        timestamp_with_time_zone(Wholesalers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Wholesalers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wholesalers_user")
                            .from(Wholesalers::Table, Wholesalers::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wholesalers_company")
                            .from(Wholesalers::Table, Wholesalers::CompanyId)
                            .to(Companies::Table, Companies::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Centers::Table)
                    .if_not_exists()
                    .col(uuid(Centers::Id).primary_key())
                    .col(uuid(Centers::CompanyId))
                    .col(string_len(Centers::Name, 255))
                    .col(string_len_null(Centers::Address, 512))
                    .col(double_null(Centers::Capacity))
                    .col(
                        timestamp_with_time_zone(Centers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Centers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_centers_company")
                            .from(Centers::Table, Centers::CompanyId)
                            .to(Companies::Table, Companies::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CenterWholesalers::Table)
                    .if_not_exists()
                    .col(uuid(CenterWholesalers::CenterId))
                    .col(uuid(CenterWholesalers::WholesalerId))
                    .primary_key(
                        Index::create()
                            .col(CenterWholesalers::CenterId)
                            .col(CenterWholesalers::WholesalerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_center_wholesalers_center")
                            .from(CenterWholesalers::Table, CenterWholesalers::CenterId)
                            .to(Centers::Table, Centers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_center_wholesalers_wholesaler")
                            .from(CenterWholesalers::Table, CenterWholesalers::WholesalerId)
                            .to(Wholesalers::Table, Wholesalers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CenterWholesalers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Centers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wholesalers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Wholesalers {
    Table,
    Id,
    UserId,
    CompanyId,
    Name,
    Address,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Centers {
    Table,
    Id,
    CompanyId,
    Name,
    Address,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CenterWholesalers {
    Table,
    CenterId,
    WholesalerId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}
