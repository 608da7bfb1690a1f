//! Translation from validated queries to an ordered constraint plan. The
//! plan is datastore-agnostic: rendering it into SQL lives in the db layer.
//!
//! The operator for each filterable column is fixed here at definition
//! time. `singer` (and the catalog's `title`) match by case-insensitive
//! substring; everything else is an exact match. Requests cannot choose
//! operators or introduce columns.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::validate::{CatalogQuery, DateFilter, SignupQuery};
use crate::domain::vocabulary::SortOrder;

pub const SIGNUPS_TABLE: &str = "bhajan_signups";
pub const CATALOG_TABLE: &str = "bhajans";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    ContainsInsensitive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub column: &'static str,
    pub op: FilterOp,
    pub value: BindValue,
}

/// Inclusive timestamp range, used for whole-day matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeClause {
    pub column: &'static str,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageClause {
    pub offset: i64,
    pub limit: i64,
}

/// The ordered constraints of one query. The same plan renders both the
/// page fetch and the total-count query (the count ignores order and
/// pagination).
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub table: &'static str,
    pub filters: Vec<FilterClause>,
    pub ranges: Vec<RangeClause>,
    pub order: Option<(&'static str, SortOrder)>,
    pub page: Option<PageClause>,
}

impl QueryPlan {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            ranges: Vec::new(),
            order: None,
            page: None,
        }
    }

    fn equals(&mut self, column: &'static str, value: BindValue) {
        self.filters.push(FilterClause {
            column,
            op: FilterOp::Equals,
            value,
        });
    }

    fn contains(&mut self, column: &'static str, needle: &str) {
        self.filters.push(FilterClause {
            column,
            op: FilterOp::ContainsInsensitive,
            value: BindValue::Text(format!("%{}%", needle)),
        });
    }

    fn date(&mut self, column: &'static str, filter: DateFilter) {
        match filter {
            DateFilter::At(ts) => self.equals(column, BindValue::Timestamp(ts)),
            DateFilter::Day(day) => {
                let (from, to) = day_window(day);
                self.ranges.push(RangeClause { column, from, to });
            }
        }
    }
}

/// Inclusive bounds of one calendar day: `[00:00:00, 23:59:59]` UTC.
pub fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let from = day
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc();
    let to = day
        .and_hms_opt(23, 59, 59)
        .expect("23:59:59 is a valid time")
        .and_utc();
    (from, to)
}

pub fn translate_signup_query(query: &SignupQuery) -> QueryPlan {
    let mut plan = QueryPlan::new(SIGNUPS_TABLE);

    if let Some(deity) = query.deity {
        plan.equals("diety", BindValue::Text(deity.as_str().to_string()));
    }
    if let Some(tempo) = query.tempo {
        plan.equals("tempo", BindValue::Text(tempo.as_str().to_string()));
    }
    if let Some(status) = query.offering_status {
        plan.equals(
            "offering_status",
            BindValue::Text(status.as_str().to_string()),
        );
    }
    if let Some(signed_up) = query.signed_up {
        plan.equals("signed_up", BindValue::Bool(signed_up));
    }
    if let Some(singer) = &query.singer {
        plan.contains("singer", singer);
    }
    if let Some(filter) = query.created_at {
        plan.date("created_at", filter);
    }
    if let Some(filter) = query.offering_on {
        plan.date("offering_on", filter);
    }

    plan.order = match query.sort {
        Some((field, order)) => Some((field.column(), order)),
        // Deterministic default so repeated queries page identically
        None => Some(("created_at", SortOrder::Asc)),
    };

    plan.page = query.page.map(|p| PageClause {
        offset: p.offset(),
        limit: p.limit(),
    });

    plan
}

pub fn translate_catalog_query(query: &CatalogQuery) -> QueryPlan {
    let mut plan = QueryPlan::new(CATALOG_TABLE);

    if let Some(title) = &query.title {
        plan.contains("title", title);
    }
    if let Some(deity) = &query.deity {
        plan.equals("diety", BindValue::Text(deity.clone()));
    }
    if let Some(tempo) = &query.tempo {
        plan.equals("tempo", BindValue::Text(tempo.clone()));
    }
    if let Some(language) = &query.language {
        plan.equals("language", BindValue::Text(language.clone()));
    }
    if let Some(level) = &query.level {
        plan.equals("level", BindValue::Text(level.clone()));
    }

    plan.order = Some(("title", SortOrder::Asc));
    plan.page = query.page.map(|p| PageClause {
        offset: p.offset(),
        limit: p.limit(),
    });

    plan
}

/// Plan for the distribution endpoints: an optional whole-day constraint on
/// `offering_on`, no ordering, no pagination (counting happens in process).
pub fn translate_distribution(day: Option<NaiveDate>) -> QueryPlan {
    let mut plan = QueryPlan::new(SIGNUPS_TABLE);
    if let Some(day) = day {
        let (from, to) = day_window(day);
        plan.ranges.push(RangeClause {
            column: "offering_on",
            from,
            to,
        });
    }
    plan
}
