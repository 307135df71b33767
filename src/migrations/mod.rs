//! Schema migrations, applied in the order given by their revision graph.
pub use sea_orm_migration::prelude::*;

pub mod chain;

mod m20240301_000001_create_users;
mod m20240301_000002_create_companies;
mod m20240301_000003_create_wholesalers_and_centers;
mod m20240301_000004_create_farmers_and_retailers;
mod m20240301_000005_create_contracts;
mod m20240301_000006_create_inventories;
mod m20240301_000007_contract_status_as_string;
mod m20240301_000008_add_lookup_indexes;

use chain::Revision;

pub struct Migrator;

fn registry() -> Vec<(Revision, Box<dyn MigrationTrait>)> {
    vec![
        (
            m20240301_000001_create_users::REVISION,
            Box::new(m20240301_000001_create_users::Migration),
        ),
        (
            m20240301_000002_create_companies::REVISION,
            Box::new(m20240301_000002_create_companies::Migration),
        ),
        (
            m20240301_000003_create_wholesalers_and_centers::REVISION,
            Box::new(m20240301_000003_create_wholesalers_and_centers::Migration),
        ),
        (
            m20240301_000004_create_farmers_and_retailers::REVISION,
            Box::new(m20240301_000004_create_farmers_and_retailers::Migration),
        ),
        (
            m20240301_000005_create_contracts::REVISION,
            Box::new(m20240301_000005_create_contracts::Migration),
        ),
        (
            m20240301_000006_create_inventories::REVISION,
            Box::new(m20240301_000006_create_inventories::Migration),
        ),
        (
            m20240301_000007_contract_status_as_string::REVISION,
            Box::new(m20240301_000007_contract_status_as_string::Migration),
        ),
        (
            m20240301_000008_add_lookup_indexes::REVISION,
            Box::new(m20240301_000008_add_lookup_indexes::Migration),
        ),
    ]
}

/// Registered revisions in dependency order.
pub fn revisions() -> Result<Vec<Revision>, chain::ChainError> {
    let revisions: Vec<Revision> = registry().into_iter().map(|(rev, _)| rev).collect();
    let order = chain::resolve(&revisions)?;
    Ok(order.into_iter().map(|i| revisions[i]).collect())
}

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        let (revisions, migrations): (Vec<Revision>, Vec<Box<dyn MigrationTrait>>) =
            registry().into_iter().unzip();
        // The registry is static; `registry_resolves` covers every edge.
        let order = chain::resolve(&revisions).expect("invalid migration chain");
        let mut slots: Vec<Option<Box<dyn MigrationTrait>>> =
            migrations.into_iter().map(Some).collect();
        order.into_iter().filter_map(|i| slots[i].take()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves() {
        let ordered = revisions().unwrap();
        assert_eq!(ordered.len(), registry().len());
        assert_eq!(ordered.first().unwrap().id, "m20240301_000001_create_users");
        assert_eq!(
            ordered.last().unwrap().id,
            "m20240301_000008_add_lookup_indexes"
        );
    }

    #[test]
    fn revision_ids_match_migration_names() {
        for (revision, migration) in registry() {
            assert_eq!(revision.id, migration.name());
        }
    }

    #[test]
    fn contracts_follow_both_branches() {
        let ids: Vec<&str> = revisions().unwrap().iter().map(|r| r.id).collect();
        let pos = |id: &str| ids.iter().position(|x| *x == id).unwrap();
        let contracts = pos("m20240301_000005_create_contracts");
        assert!(pos("m20240301_000003_create_wholesalers_and_centers") < contracts);
        assert!(pos("m20240301_000004_create_farmers_and_retailers") < contracts);
    }

    #[test]
    fn migrator_follows_resolved_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let ids: Vec<String> = revisions()
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(names, ids);
    }
}
