//! Turns optional filter fields into a single SQL conjunction.

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect,
    Select, Value,
    sea_query::{Expr, Func, LikeExpr},
};

use crate::routes::params::PageParams;

/// Accumulates predicates; every absent input is skipped.
#[derive(Debug, Clone)]
pub struct Predicates {
    condition: Condition,
}

impl Default for Predicates {
    fn default() -> Self {
        Self::new()
    }
}

impl Predicates {
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
        }
    }

    /// Case-insensitive substring match. Empty needles are ignored.
    pub fn contains<C: ColumnTrait>(mut self, column: C, needle: Option<&str>) -> Self {
        if let Some(needle) = needle.filter(|n| !n.is_empty()) {
            let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
            let lowered = Func::lower(Expr::col((column.entity_name(), column)));
            self.condition = self
                .condition
                .add(Expr::expr(lowered).like(LikeExpr::new(pattern).escape('\\')));
        }
        self
    }

    pub fn equals<C, V>(mut self, column: C, value: Option<V>) -> Self
    where
        C: ColumnTrait,
        V: Into<Value>,
    {
        if let Some(value) = value {
            self.condition = self.condition.add(column.eq(value));
        }
        self
    }

    /// Inclusive range; either bound may be absent.
    pub fn between<C, V>(mut self, column: C, min: Option<V>, max: Option<V>) -> Self
    where
        C: ColumnTrait,
        V: Into<Value>,
    {
        if let Some(min) = min {
            self.condition = self.condition.add(column.gte(min));
        }
        if let Some(max) = max {
            self.condition = self.condition.add(column.lte(max));
        }
        self
    }

    pub fn build(self) -> Condition {
        self.condition
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Counts the filtered rows, then fetches the requested window.
pub async fn fetch_page<E, C>(
    db: &C,
    select: Select<E>,
    page: PageParams,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    C: ConnectionTrait,
{
    let total = select.clone().count(db).await?;
    let items = window(select, page).all(db).await?;
    Ok((items, total))
}

/// SQLite rejects `OFFSET` without `LIMIT`, so an open-ended window past the
/// first row carries the largest limit the backends accept.
fn window<E: EntityTrait>(select: Select<E>, page: PageParams) -> Select<E> {
    match (page.skip(), page.limit) {
        (0, None) => select,
        (skip, limit) => select
            .offset(skip)
            .limit(limit.unwrap_or(i64::MAX as u64)),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    use super::*;
    use crate::entity::{Contracts, Farmers, contracts, farmers};

    fn window_sql(page: PageParams) -> String {
        window(Farmers::find(), page)
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn unbounded_first_window_has_no_offset_or_limit() {
        let sql = window_sql(PageParams::default());
        assert!(!sql.contains("OFFSET") && !sql.contains("LIMIT"), "{sql}");
    }

    #[test]
    fn skip_without_limit_still_renders_a_limit() {
        let sql = window_sql(PageParams::new(3, None));
        assert!(sql.contains(&format!("LIMIT {}", i64::MAX)), "{sql}");
        assert!(sql.contains("OFFSET 3"), "{sql}");
    }

    #[test]
    fn explicit_limit_is_kept() {
        let sql = window_sql(PageParams::new(1, Some(2)));
        assert!(sql.contains("LIMIT 2") && sql.contains("OFFSET 1"), "{sql}");
    }

    fn farmer_sql(predicates: Predicates) -> String {
        Farmers::find()
            .filter(predicates.build())
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn absent_fields_add_no_predicate() {
        let sql = farmer_sql(
            Predicates::new()
                .contains(farmers::Column::Name, None)
                .contains(farmers::Column::Address, Some(""))
                .between::<_, f64>(farmers::Column::FarmSize, None, None),
        );
        assert!(sql.ends_with("WHERE TRUE"), "{sql}");
        assert!(!sql.contains("LIKE") && !sql.contains(">=") && !sql.contains("<="), "{sql}");
    }

    #[test]
    fn text_match_is_lowercased_substring() {
        let sql = farmer_sql(Predicates::new().contains(farmers::Column::Name, Some("Green")));
        assert!(sql.contains(r#"LOWER("farmers"."name") LIKE '%green%'"#), "{sql}");
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn fields_are_conjoined() {
        let sql = farmer_sql(
            Predicates::new()
                .contains(farmers::Column::Address, Some("valley"))
                .between(farmers::Column::FarmSize, Some(2.0), Some(10.0))
                .between(farmers::Column::MemberCount, None, Some(5)),
        );
        assert!(sql.contains(r#""farmers"."farm_size" >= 2"#), "{sql}");
        assert!(sql.contains(r#""farmers"."farm_size" <= 10"#), "{sql}");
        assert!(sql.contains(r#""farmers"."member_count" <= 5"#), "{sql}");
        assert_eq!(sql.matches(" AND ").count(), 3, "{sql}");
    }

    #[test]
    fn enum_fields_match_by_equality() {
        let sql = Contracts::find()
            .filter(
                Predicates::new()
                    .equals(contracts::Column::Status, Some(contracts::ContractStatus::Approved))
                    .build(),
            )
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""contracts"."status" = 'APPROVED'"#), "{sql}");
    }
}
