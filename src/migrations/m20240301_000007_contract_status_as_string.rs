//! Store contract status and payment status as plain `varchar(16)` columns
//! guarded by CHECK constraints instead of native enum types. `down` restores
//! the enum types and converts the columns back.
use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

use super::chain::Revision;
use super::m20240301_000005_create_contracts::{
    CONTRACT_STATUS_TYPE, CONTRACT_STATUSES, PAYMENT_STATUS_TYPE, PAYMENT_STATUSES,
};

pub const REVISION: Revision = Revision {
    id: "m20240301_000007_contract_status_as_string",
    parents: &["m20240301_000006_create_inventories"],
};

struct StatusColumn {
    column: &'static str,
    type_name: &'static str,
    values: &'static [&'static str],
    check: &'static str,
}

const COLUMNS: [StatusColumn; 2] = [
    StatusColumn {
        column: "status",
        type_name: CONTRACT_STATUS_TYPE,
        values: &CONTRACT_STATUSES,
        check: "ck_contracts_status",
    },
    StatusColumn {
        column: "payment_status",
        type_name: PAYMENT_STATUS_TYPE,
        values: &PAYMENT_STATUSES,
        check: "ck_contracts_payment_status",
    },
];

fn quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn upgrade_statements() -> Vec<String> {
    let mut statements = Vec::new();
    for col in &COLUMNS {
        statements.push(format!(
            "ALTER TABLE contracts ALTER COLUMN {} TYPE VARCHAR(16) USING {}::text",
            col.column, col.column
        ));
        statements.push(format!(
            "ALTER TABLE contracts ADD CONSTRAINT {} CHECK ({} IN ({}))",
            col.check,
            col.column,
            quoted(col.values)
        ));
    }
    for col in &COLUMNS {
        statements.push(format!("DROP TYPE {}", col.type_name));
    }
    statements
}

fn downgrade_statements() -> Vec<String> {
    let mut statements = Vec::new();
    for col in &COLUMNS {
        statements.push(format!(
            "ALTER TABLE contracts DROP CONSTRAINT {}",
            col.check
        ));
        statements.push(format!(
            "CREATE TYPE {} AS ENUM ({})",
            col.type_name,
            quoted(col.values)
        ));
        statements.push(format!(
            "ALTER TABLE contracts ALTER COLUMN {} TYPE {} USING {}::{}",
            col.column, col.type_name, col.column, col.type_name
        ));
    }
    statements
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for sql in upgrade_statements() {
            conn.execute_unprepared(&sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for sql in downgrade_statements() {
            conn.execute_unprepared(&sql).await?;
        }
        Ok(())
    }
}
