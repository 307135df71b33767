use sea_orm_migration::prelude::*;

use super::chain::Revision;

pub const REVISION: Revision = Revision {
    id: "m20240301_000008_add_lookup_indexes",
    parents: &["m20240301_000007_contract_status_as_string"],
};

/// (index name, table, column)
const INDEXES: [(&str, &str, &str); 8] = [
    ("idx_companies_owner", "companies", "owner_id"),
    ("idx_wholesalers_company", "wholesalers", "company_id"),
    ("idx_centers_company", "centers", "company_id"),
    ("idx_contracts_farmer", "contracts", "farmer_id"),
    ("idx_contracts_wholesaler", "contracts", "wholesaler_id"),
    ("idx_contracts_status", "contracts", "status"),
    ("idx_inventories_center", "inventories", "center_id"),
    ("idx_inventory_items_inventory", "inventory_items", "inventory_id"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Alias::new(table))
                        .col(Alias::new(column))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
