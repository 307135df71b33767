//! Create `users`, the identity records every role hangs off.
use sea_orm_migration::{prelude::*, schema::*};

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000001_create_users",
    parents: &[],
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(uuid(Users::Id).primary_key())
                    .col(string_len(Users::Email, 255).unique_key())
                    .col(string_len_null(Users::ExternalId, 128).unique_key())
                    .col(string_len(Users::Name, 128))
                    .col(string_len_null(Users::Phone, 32))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    ExternalId,
    Name,
    Phone,
    CreatedAt,
    UpdatedAt,
}
