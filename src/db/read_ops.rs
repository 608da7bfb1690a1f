//! Plan rendering and read queries. Every request value reaches SQL as a
//! bound parameter; the only text spliced into statements comes from the
//! closed column sets in the translator.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};
use crate::domain::translate::{BindValue, FilterOp, QueryPlan};
use crate::models::rows::{CatalogRow, GroupingRow, SignupRow, CATALOG_COLUMNS, SIGNUP_COLUMNS};

/// Renders the page-fetch query for a plan.
pub fn select_builder(plan: &QueryPlan, columns: &str) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", columns, plan.table));
    push_where(&mut qb, plan);

    if let Some((column, order)) = plan.order {
        qb.push(" ORDER BY ");
        qb.push(column);
        qb.push(" ");
        qb.push(order.sql());
        // Unique tie-break keeps paging deterministic when the sort column
        // has duplicates
        qb.push(", id ASC");
    }

    if let Some(page) = plan.page {
        qb.push(" LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset);
    }

    qb
}

/// Renders the exact-count query: same constraints, no ordering or window.
pub fn count_builder(plan: &QueryPlan) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", plan.table));
    push_where(&mut qb, plan);
    qb
}

fn push_where(qb: &mut QueryBuilder<'static, Postgres>, plan: &QueryPlan) {
    let mut first = true;
    let mut sep = |qb: &mut QueryBuilder<'static, Postgres>| {
        qb.push(if std::mem::take(&mut first) {
            " WHERE "
        } else {
            " AND "
        });
    };

    for filter in &plan.filters {
        sep(qb);
        qb.push(filter.column);
        match filter.op {
            FilterOp::Equals => {
                qb.push(" = ");
                push_value(qb, &filter.value);
            }
            FilterOp::ContainsInsensitive => {
                qb.push(" ILIKE ");
                push_value(qb, &filter.value);
            }
        }
    }

    for range in &plan.ranges {
        sep(qb);
        qb.push(range.column);
        qb.push(" >= ");
        qb.push_bind(range.from);
        qb.push(" AND ");
        qb.push(range.column);
        qb.push(" <= ");
        qb.push_bind(range.to);
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: &BindValue) {
    match value {
        BindValue::Text(s) => qb.push_bind(s.clone()),
        BindValue::Bool(b) => qb.push_bind(*b),
        BindValue::Timestamp(ts) => qb.push_bind(*ts),
    };
}

#[tracing::instrument(skip(pool, plan), fields(table = plan.table))]
pub async fn fetch_signups(pool: &PgPool, plan: &QueryPlan) -> Result<(Vec<SignupRow>, i64)> {
    let mut query = select_builder(plan, SIGNUP_COLUMNS);
    debug!(sql = query.sql(), "Fetching signup page");

    let rows = query
        .build_query_as::<SignupRow>()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;
    let total = fetch_count(pool, plan).await?;

    Ok((rows, total))
}

#[tracing::instrument(skip(pool, plan), fields(table = plan.table))]
pub async fn fetch_catalog(pool: &PgPool, plan: &QueryPlan) -> Result<(Vec<CatalogRow>, i64)> {
    let mut query = select_builder(plan, CATALOG_COLUMNS);
    debug!(sql = query.sql(), "Fetching catalog page");

    let rows = query
        .build_query_as::<CatalogRow>()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;
    let total = fetch_count(pool, plan).await?;

    Ok((rows, total))
}

async fn fetch_count(pool: &PgPool, plan: &QueryPlan) -> Result<i64> {
    let mut query = count_builder(plan);
    query
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::from_sqlx)
}

/// Fetches the distribution projection: the grouping column aliased to
/// `value` plus the signed-up flag, constrained by the plan's day window.
#[tracing::instrument(skip(pool, plan))]
pub async fn fetch_grouping_rows(
    pool: &PgPool,
    plan: &QueryPlan,
    group_column: &'static str,
) -> Result<Vec<GroupingRow>> {
    let columns = format!("{} AS value, signed_up", group_column);
    let mut query = select_builder(plan, &columns);
    debug!(sql = query.sql(), "Fetching distribution rows");

    query
        .build_query_as::<GroupingRow>()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::from_sqlx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::translate::{
        translate_distribution, translate_signup_query,
    };
    use crate::domain::validate::{PageWindow, SignupQuery};
    use crate::domain::vocabulary::{Deity, SortField, SortOrder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_sql_with_filters_and_page() {
        let query = SignupQuery {
            deity: Some(Deity::Krishna),
            singer: Some("asha".to_string()),
            page: Some(PageWindow {
                page: 2,
                page_size: 10,
            }),
            ..Default::default()
        };
        let plan = translate_signup_query(&query);
        let sql = select_builder(&plan, "id").sql().to_string();

        assert_eq!(
            sql,
            "SELECT id FROM bhajan_signups WHERE diety = $1 AND singer ILIKE $2 \
             ORDER BY created_at ASC, id ASC LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn test_count_sql_ignores_order_and_page() {
        let query = SignupQuery {
            deity: Some(Deity::Rama),
            page: Some(PageWindow {
                page: 5,
                page_size: 20,
            }),
            ..Default::default()
        };
        let plan = translate_signup_query(&query);
        let sql = count_builder(&plan).sql().to_string();

        assert_eq!(sql, "SELECT COUNT(*) FROM bhajan_signups WHERE diety = $1");
    }

    #[test]
    fn test_day_window_renders_inclusive_range() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
        let plan = translate_distribution(Some(day));
        let sql = select_builder(&plan, "diety AS value, signed_up")
            .sql()
            .to_string();

        assert_eq!(
            sql,
            "SELECT diety AS value, signed_up FROM bhajan_signups \
             WHERE offering_on >= $1 AND offering_on <= $2"
        );
    }

    #[test]
    fn test_two_day_filters_both_render_in_where_clause() {
        let created = chrono::NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let offered = chrono::NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
        let query = SignupQuery {
            created_at: Some(crate::domain::validate::DateFilter::Day(created)),
            offering_on: Some(crate::domain::validate::DateFilter::Day(offered)),
            ..Default::default()
        };
        let plan = translate_signup_query(&query);
        let sql = count_builder(&plan).sql().to_string();

        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM bhajan_signups \
             WHERE created_at >= $1 AND created_at <= $2 \
             AND offering_on >= $3 AND offering_on <= $4"
        );
    }

    #[test]
    fn test_unfiltered_plan_renders_no_where_clause() {
        let plan = translate_distribution(None);
        let sql = count_builder(&plan).sql().to_string();
        assert_eq!(sql, "SELECT COUNT(*) FROM bhajan_signups");
    }

    #[test]
    fn test_sort_renders_direction_and_tie_break() {
        let query = SignupQuery {
            sort: Some((SortField::Singer, SortOrder::Desc)),
            ..Default::default()
        };
        let plan = translate_signup_query(&query);
        let sql = select_builder(&plan, "id").sql().to_string();

        assert_eq!(
            sql,
            "SELECT id FROM bhajan_signups ORDER BY singer DESC, id ASC"
        );
    }
}
