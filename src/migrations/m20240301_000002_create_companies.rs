//! Create `companies`, each owned by one user.
use sea_orm_migration::{prelude::*, schema::*};

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000002_create_companies",
    parents: &["m20240301_000001_create_users"],
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(uuid(Companies::Id).primary_key())
                    .col(uuid(Companies::OwnerId))
                    .col(string_len(Companies::Name, 255))
                    .col(string_len_null(Companies::RegistrationNumber, 64))
                    .col(string_len_null(Companies::Address, 512))
                    .col(
                        timestamp_with_time_zone(Companies::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Companies::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_companies_owner")
                            .from(Companies::Table, Companies::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    OwnerId,
    Name,
    RegistrationNumber,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
