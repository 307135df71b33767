use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use agri_market_api::migrations::Migrator;

#[derive(Debug, PartialEq)]
struct SchemaSnapshot {
    tables: Vec<String>,
    enum_types: Vec<String>,
}

async fn names(db: &DatabaseConnection, sql: &str, schema: &str) -> anyhow::Result<Vec<String>> {
    let rows = db
        .query_all(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [schema.into()],
        ))
        .await?;
    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        names.push(row.try_get::<String>("", "name")?);
    }
    Ok(names)
}

async fn snapshot(db: &DatabaseConnection, schema: &str) -> anyhow::Result<SchemaSnapshot> {
    Ok(SchemaSnapshot {
        tables: names(
            db,
            "SELECT table_name::text AS name FROM information_schema.tables \
             WHERE table_schema = $1 AND table_name <> 'seaql_migrations' ORDER BY 1",
            schema,
        )
        .await?,
        enum_types: names(
            db,
            "SELECT t.typname::text AS name FROM pg_type t \
             JOIN pg_namespace n ON n.oid = t.typnamespace \
             WHERE n.nspname = $1 AND t.typtype = 'e' ORDER BY 1",
            schema,
        )
        .await?,
    })
}

async fn column_type(
    db: &DatabaseConnection,
    schema: &str,
    column: &str,
) -> anyhow::Result<String> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT data_type::text AS name FROM information_schema.columns \
             WHERE table_schema = $1 AND table_name = 'contracts' AND column_name = $2",
            [schema.into(), column.into()],
        ))
        .await?
        .ok_or_else(|| anyhow::anyhow!("contracts.{column} not found"))?;
    Ok(row.try_get::<String>("", "name")?)
}

// Applies every migration in its own schema, then rolls all of them back.
#[tokio::test]
async fn up_then_down_restores_empty_schema() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run migration tests."
            );
            return Ok(());
        }
    };

    let admin = Database::connect(&database_url).await?;
    let schema = format!("migration_roundtrip_{}", Uuid::new_v4().simple());
    admin
        .execute_unprepared(&format!("CREATE SCHEMA {schema}"))
        .await?;

    let mut options = ConnectOptions::new(database_url.clone());
    options
        .max_connections(1)
        .sqlx_logging(false)
        .set_schema_search_path(schema.clone());
    let db = Database::connect(options).await?;

    let before = snapshot(&db, &schema).await?;
    assert!(before.tables.is_empty());

    // Up to the merge point the statuses are native enums.
    Migrator::up(&db, Some(5)).await?;
    let merged = snapshot(&db, &schema).await?;
    assert_eq!(merged.enum_types, ["contract_status", "payment_status"]);
    assert_eq!(column_type(&db, &schema, "status").await?, "USER-DEFINED");

    Migrator::up(&db, None).await?;
    let full = snapshot(&db, &schema).await?;
    for table in [
        "center_wholesalers",
        "centers",
        "companies",
        "contracts",
        "farmers",
        "inventories",
        "inventory_items",
        "retailers",
        "users",
        "wholesalers",
    ] {
        assert!(full.tables.iter().any(|t| t == table), "missing {table}");
    }
    assert!(full.enum_types.is_empty());
    assert_eq!(column_type(&db, &schema, "status").await?, "character varying");
    assert_eq!(
        column_type(&db, &schema, "payment_status").await?,
        "character varying"
    );

    // Rolling back the index and string migrations brings the native enums back.
    Migrator::down(&db, Some(2)).await?;
    let reverted = snapshot(&db, &schema).await?;
    assert_eq!(reverted.enum_types, ["contract_status", "payment_status"]);
    assert_eq!(column_type(&db, &schema, "status").await?, "USER-DEFINED");

    Migrator::down(&db, None).await?;
    let after = snapshot(&db, &schema).await?;
    assert_eq!(after, before);

    db.close().await?;
    admin
        .execute_unprepared(&format!("DROP SCHEMA {schema} CASCADE"))
        .await?;
    Ok(())
}
