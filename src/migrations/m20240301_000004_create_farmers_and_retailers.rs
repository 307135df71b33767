//! Create the `farmers` and `retailers` role tables. Branches off the users
//! revision; nothing here depends on companies.
use sea_orm_migration::{prelude::*, schema::*};

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000004_create_farmers_and_retailers",
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
                    .table(Farmers::Table)
                    .if_not_exists()
                    .col(uuid(Farmers::Id).primary_key())
                    .col(uuid(Farmers::UserId).unique_key())
                    .col(string_len(Farmers::Name, 255))
                    .col(string_len(Farmers::Address, 512))
                    .col(double(Farmers::FarmSize).default(0.0))
                    .col(double(Farmers::AnnualOutput).default(0.0))
                    .col(integer(Farmers::MemberCount).default(1))
                    .col(
                        timestamp_with_time_zone(Farmers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Farmers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmers_user")
                            .from(Farmers::Table, Farmers::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Retailers::Table)
                    .if_not_exists()
                    .col(uuid(Retailers::Id).primary_key())
                    .col(uuid_null(Retailers::UserId).unique_key())
                    .col(string_len(Retailers::Name, 255))
                    .col(string_len_null(Retailers::Address, 512))
                    .col(string_len_null(Retailers::StoreType, 64))
                    .col(
                        timestamp_with_time_zone(Retailers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Retailers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_retailers_user")
                            .from(Retailers::Table, Retailers::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Retailers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Farmers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Farmers {
    Table,
    Id,
    UserId,
    Name,
    Address,
    FarmSize,
    AnnualOutput,
    MemberCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Retailers {
    Table,
    Id,
    UserId,
    Name,
    Address,
    StoreType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
