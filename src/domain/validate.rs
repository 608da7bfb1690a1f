//! Request validation: the gate between loosely-typed request bodies and
//! the typed queries the translator accepts. Filter/sort/pagination checks
//! are fail-fast; only signup creation accumulates (all missing required
//! fields are reported in one response).

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::vocabulary::{
    Deity, OfferingStatus, SortField, SortOrder, Tempo, Vocabulary,
};
use crate::models::requests::{
    CatalogQueryRequest, CreateSignupRequest, PaginationRequest, SignupQueryRequest, SortRequest,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Request body is malformed")]
    InvalidRequestFormat,

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid date '{value}' for field '{field}'")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error("Field '{field}' must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid pagination: {reason}")]
    InvalidPagination { reason: String },

    #[error("Invalid sort field '{value}'")]
    InvalidSortField { value: String, allowed: Vec<String> },

    #[error("Invalid sort order '{value}', expected 'asc' or 'desc'")]
    InvalidSortOrder { value: String },

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },
}

/// A validated date filter. A bare `YYYY-MM-DD` matches the whole calendar
/// day; a full timestamp matches that instant exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateFilter {
    Day(NaiveDate),
    At(DateTime<Utc>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
}

impl PageWindow {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// A fully validated signup query, ready for translation.
#[derive(Debug, Default)]
pub struct SignupQuery {
    pub deity: Option<Deity>,
    pub tempo: Option<Tempo>,
    pub offering_status: Option<OfferingStatus>,
    pub signed_up: Option<bool>,
    pub singer: Option<String>,
    pub created_at: Option<DateFilter>,
    pub offering_on: Option<DateFilter>,
    pub page: Option<PageWindow>,
    pub sort: Option<(SortField, SortOrder)>,
}

#[derive(Debug, Default)]
pub struct CatalogQuery {
    pub title: Option<String>,
    pub deity: Option<String>,
    pub tempo: Option<String>,
    pub language: Option<String>,
    pub level: Option<String>,
    pub page: Option<PageWindow>,
}

/// A validated creation payload. `signed_up` is deliberately absent: a
/// created record is always signed up, whatever the request said.
#[derive(Debug)]
pub struct NewSignup {
    pub title: String,
    pub singer: String,
    pub details: Option<String>,
    pub position: i32,
    pub deity: Deity,
    pub tempo: Tempo,
    pub offering_on: DateTime<Utc>,
    pub offering_status: OfferingStatus,
}

pub fn validate_signup_query(
    req: &SignupQueryRequest,
    vocab: &Vocabulary,
) -> Result<SignupQuery, ValidationError> {
    let mut query = SignupQuery::default();

    if let Some(filters) = &req.filters {
        if let Some(raw) = &filters.deity {
            query.deity = Some(Deity::parse(raw).ok_or_else(|| {
                ValidationError::InvalidEnumValue {
                    field: "diety",
                    value: raw.clone(),
                    allowed: owned(&vocab.deities),
                }
            })?);
        }

        if let Some(raw) = &filters.tempo {
            query.tempo = Some(Tempo::parse(raw).ok_or_else(|| {
                ValidationError::InvalidEnumValue {
                    field: "tempo",
                    value: raw.clone(),
                    allowed: owned(&vocab.tempos),
                }
            })?);
        }

        if let Some(raw) = &filters.offering_status {
            query.offering_status = Some(OfferingStatus::parse(raw).ok_or_else(|| {
                ValidationError::InvalidEnumValue {
                    field: "offeringStatus",
                    value: raw.clone(),
                    allowed: owned(&vocab.offering_statuses),
                }
            })?);
        }

        if let Some(raw) = &filters.signed_up {
            query.signed_up = Some(raw.as_bool().ok_or(ValidationError::InvalidType {
                field: "signedUp",
                expected: "boolean",
            })?);
        }

        if let Some(raw) = &filters.created_at {
            query.created_at = Some(parse_date_filter("created_at", raw)?);
        }

        if let Some(raw) = &filters.offering_on {
            query.offering_on = Some(parse_date_filter("offering_on", raw)?);
        }

        // Free text, matched by case-insensitive substring downstream
        query.singer = filters.singer.clone();
    }

    if let Some(pagination) = &req.pagination {
        query.page = Some(validate_pagination(pagination)?);
    }

    if let Some(sort) = &req.sort {
        query.sort = Some(validate_sort(sort, vocab)?);
    }

    Ok(query)
}

pub fn validate_catalog_query(req: &CatalogQueryRequest) -> Result<CatalogQuery, ValidationError> {
    let mut query = CatalogQuery::default();

    if let Some(filters) = &req.filters {
        query.title = filters.title.clone();
        query.deity = filters.deity.clone();
        query.tempo = filters.tempo.clone();
        query.language = filters.language.clone();
        query.level = filters.level.clone();
    }

    if let Some(pagination) = &req.pagination {
        query.page = Some(validate_pagination(pagination)?);
    }

    Ok(query)
}

pub fn validate_create(
    req: &CreateSignupRequest,
    vocab: &Vocabulary,
) -> Result<NewSignup, ValidationError> {
    // Required-field check accumulates every absence before reporting
    let mut missing = Vec::new();

    let title = non_empty(&req.title);
    if title.is_none() {
        missing.push("title".to_string());
    }
    let singer = non_empty(&req.singer);
    if singer.is_none() {
        missing.push("singer".to_string());
    }
    let deity_raw = req.deity.as_ref().and_then(|f| non_empty(&f.value));
    if deity_raw.is_none() {
        missing.push("diety".to_string());
    }
    let tempo_raw = req.tempo.as_ref().and_then(|f| non_empty(&f.value));
    if tempo_raw.is_none() {
        missing.push("tempo".to_string());
    }
    let offering_raw = non_empty(&req.offering_on);
    if offering_raw.is_none() {
        missing.push("offering_on".to_string());
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingRequiredFields { fields: missing });
    }

    let deity_raw = deity_raw.unwrap();
    let deity = Deity::parse(&deity_raw).ok_or_else(|| ValidationError::InvalidEnumValue {
        field: "diety",
        value: deity_raw.clone(),
        allowed: owned(&vocab.deities),
    })?;

    let tempo_raw = tempo_raw.unwrap();
    let tempo = Tempo::parse(&tempo_raw).ok_or_else(|| ValidationError::InvalidEnumValue {
        field: "tempo",
        value: tempo_raw.clone(),
        allowed: owned(&vocab.tempos),
    })?;

    let offering_raw = offering_raw.unwrap();
    let offering_on = match parse_date_filter("offering_on", &offering_raw)? {
        DateFilter::At(ts) => ts,
        DateFilter::Day(day) => day
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_utc(),
    };

    let offering_status = match &req.offering_status {
        Some(raw) => {
            OfferingStatus::parse(raw).ok_or_else(|| ValidationError::InvalidEnumValue {
                field: "offeringStatus",
                value: raw.clone(),
                allowed: owned(&vocab.offering_statuses),
            })?
        }
        None => OfferingStatus::Pending,
    };

    Ok(NewSignup {
        title: title.unwrap(),
        singer: singer.unwrap(),
        details: non_empty(&req.details),
        position: req.position.unwrap_or(0),
        deity,
        tempo,
        offering_on,
        offering_status,
    })
}

/// Parses the distribution endpoints' `offering_on` query parameter, which
/// only accepts a bare calendar day.
pub fn parse_day(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDateFormat {
        field,
        value: value.to_string(),
    })
}

fn parse_date_filter(field: &'static str, value: &str) -> Result<DateFilter, ValidationError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(DateFilter::At(ts.with_timezone(&Utc)));
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(DateFilter::Day(day));
    }
    Err(ValidationError::InvalidDateFormat {
        field,
        value: value.to_string(),
    })
}

fn validate_pagination(req: &PaginationRequest) -> Result<PageWindow, ValidationError> {
    let page = require_integer("page", &req.page)?;
    let page_size = require_integer("pageSize", &req.page_size)?;

    if page < 1 {
        return Err(ValidationError::InvalidPagination {
            reason: "page must be >= 1".to_string(),
        });
    }
    if !(1..=100).contains(&page_size) {
        return Err(ValidationError::InvalidPagination {
            reason: "pageSize must be between 1 and 100".to_string(),
        });
    }

    Ok(PageWindow { page, page_size })
}

fn require_integer(
    name: &'static str,
    value: &Option<serde_json::Value>,
) -> Result<i64, ValidationError> {
    value
        .as_ref()
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ValidationError::InvalidPagination {
            reason: format!("{} must be an integer", name),
        })
}

fn validate_sort(
    req: &SortRequest,
    vocab: &Vocabulary,
) -> Result<(SortField, SortOrder), ValidationError> {
    let raw_field = req.field.as_deref().unwrap_or_default();
    let field = SortField::parse(raw_field).ok_or_else(|| ValidationError::InvalidSortField {
        value: raw_field.to_string(),
        allowed: owned(&vocab.sort_fields),
    })?;

    let raw_order = req.order.as_deref().unwrap_or_default();
    let order = SortOrder::parse(raw_order).ok_or_else(|| ValidationError::InvalidSortOrder {
        value: raw_order.to_string(),
    })?;

    Ok((field, order))
}

fn owned(values: &[&'static str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requests::{EnumValueField, SignupFilters};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn vocab() -> Vocabulary {
        Vocabulary::new()
    }

    fn query_with_filters(filters: SignupFilters) -> SignupQueryRequest {
        SignupQueryRequest {
            filters: Some(filters),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_deity_reports_field_and_legal_set() {
        let req = query_with_filters(SignupFilters {
            deity: Some("Zeus".to_string()),
            ..Default::default()
        });

        let err = validate_signup_query(&req, &vocab()).unwrap_err();
        match err {
            ValidationError::InvalidEnumValue {
                field,
                value,
                allowed,
            } => {
                assert_eq!(field, "diety");
                assert_eq!(value, "Zeus");
                assert_eq!(allowed.len(), Deity::ALL.len());
                assert!(allowed.contains(&"Sai".to_string()));
            }
            other => panic!("expected InvalidEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tempo_rejected() {
        let req = query_with_filters(SignupFilters {
            tempo: Some("Allegro".to_string()),
            ..Default::default()
        });

        assert!(matches!(
            validate_signup_query(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidEnumValue { field: "tempo", .. }
        ));
    }

    #[test]
    fn test_signed_up_must_be_strictly_boolean() {
        for bad in [json!("true"), json!(1), json!([true])] {
            let req = query_with_filters(SignupFilters {
                signed_up: Some(bad),
                ..Default::default()
            });
            assert!(matches!(
                validate_signup_query(&req, &vocab()).unwrap_err(),
                ValidationError::InvalidType {
                    field: "signedUp",
                    ..
                }
            ));
        }

        let req = query_with_filters(SignupFilters {
            signed_up: Some(json!(false)),
            ..Default::default()
        });
        let query = validate_signup_query(&req, &vocab()).unwrap();
        assert_eq!(query.signed_up, Some(false));
    }

    #[test]
    fn test_date_filter_accepts_day_and_timestamp() {
        let req = query_with_filters(SignupFilters {
            offering_on: Some("2024-05-12".to_string()),
            created_at: Some("2024-05-12T10:30:00Z".to_string()),
            ..Default::default()
        });

        let query = validate_signup_query(&req, &vocab()).unwrap();
        assert!(matches!(query.offering_on, Some(DateFilter::Day(_))));
        assert!(matches!(query.created_at, Some(DateFilter::At(_))));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let req = query_with_filters(SignupFilters {
            offering_on: Some("May 12th".to_string()),
            ..Default::default()
        });

        assert!(matches!(
            validate_signup_query(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidDateFormat {
                field: "offering_on",
                ..
            }
        ));
    }

    #[test]
    fn test_pagination_bounds() {
        let cases = [
            (json!(0), json!(10), false),
            (json!(1), json!(0), false),
            (json!(1), json!(101), false),
            (json!(1), json!(100), true),
            (json!(3), json!(25), true),
        ];

        for (page, page_size, ok) in cases {
            let req = SignupQueryRequest {
                pagination: Some(PaginationRequest {
                    page: Some(page.clone()),
                    page_size: Some(page_size.clone()),
                }),
                ..Default::default()
            };
            let result = validate_signup_query(&req, &vocab());
            assert_eq!(
                result.is_ok(),
                ok,
                "page={} pageSize={} expected ok={}",
                page,
                page_size,
                ok
            );
        }
    }

    #[test]
    fn test_pagination_requires_both_integers() {
        let req = SignupQueryRequest {
            pagination: Some(PaginationRequest {
                page: Some(json!(1)),
                page_size: Some(json!("20")),
            }),
            ..Default::default()
        };
        assert!(matches!(
            validate_signup_query(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidPagination { .. }
        ));

        let req = SignupQueryRequest {
            pagination: Some(PaginationRequest {
                page: None,
                page_size: Some(json!(20)),
            }),
            ..Default::default()
        };
        assert!(matches!(
            validate_signup_query(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidPagination { .. }
        ));
    }

    #[test]
    fn test_sort_validation() {
        let req = SignupQueryRequest {
            sort: Some(SortRequest {
                field: Some("singer".to_string()),
                order: Some("desc".to_string()),
            }),
            ..Default::default()
        };
        let query = validate_signup_query(&req, &vocab()).unwrap();
        assert_eq!(query.sort, Some((SortField::Singer, SortOrder::Desc)));

        let req = SignupQueryRequest {
            sort: Some(SortRequest {
                field: Some("lyrics".to_string()),
                order: Some("asc".to_string()),
            }),
            ..Default::default()
        };
        assert!(matches!(
            validate_signup_query(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidSortField { .. }
        ));

        let req = SignupQueryRequest {
            sort: Some(SortRequest {
                field: Some("title".to_string()),
                order: Some("descending".to_string()),
            }),
            ..Default::default()
        };
        assert!(matches!(
            validate_signup_query(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidSortOrder { .. }
        ));
    }

    #[test]
    fn test_create_accumulates_all_missing_fields() {
        let req = CreateSignupRequest {
            title: Some("Bhajan Mala".to_string()),
            deity: Some(EnumValueField {
                value: Some("Krishna".to_string()),
            }),
            tempo: Some(EnumValueField {
                value: Some("Fast".to_string()),
            }),
            ..Default::default()
        };

        match validate_create(&req, &vocab()).unwrap_err() {
            ValidationError::MissingRequiredFields { fields } => {
                assert_eq!(fields, vec!["singer", "offering_on"]);
            }
            other => panic!("expected MissingRequiredFields, got {:?}", other),
        }
    }

    #[test]
    fn test_create_treats_blank_strings_as_missing() {
        let req = CreateSignupRequest {
            title: Some("  ".to_string()),
            ..Default::default()
        };

        match validate_create(&req, &vocab()).unwrap_err() {
            ValidationError::MissingRequiredFields { fields } => {
                assert!(fields.contains(&"title".to_string()));
                assert_eq!(fields.len(), 5);
            }
            other => panic!("expected MissingRequiredFields, got {:?}", other),
        }
    }

    #[test]
    fn test_create_valid_payload() {
        let req = CreateSignupRequest {
            title: Some("Govinda Krishna Jai".to_string()),
            singer: Some("Asha".to_string()),
            deity: Some(EnumValueField {
                value: Some("Krishna".to_string()),
            }),
            tempo: Some(EnumValueField {
                value: Some("Medium".to_string()),
            }),
            offering_on: Some("2024-05-12".to_string()),
            ..Default::default()
        };

        let new = validate_create(&req, &vocab()).unwrap();
        assert_eq!(new.deity, Deity::Krishna);
        assert_eq!(new.tempo, Tempo::Medium);
        assert_eq!(new.offering_status, OfferingStatus::Pending);
        assert_eq!(new.offering_on.to_rfc3339(), "2024-05-12T00:00:00+00:00");
    }

    #[test]
    fn test_create_rejects_unknown_enum_after_presence_check() {
        let req = CreateSignupRequest {
            title: Some("Test".to_string()),
            singer: Some("Asha".to_string()),
            deity: Some(EnumValueField {
                value: Some("Unknown".to_string()),
            }),
            tempo: Some(EnumValueField {
                value: Some("Fast".to_string()),
            }),
            offering_on: Some("2024-05-12".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            validate_create(&req, &vocab()).unwrap_err(),
            ValidationError::InvalidEnumValue { field: "diety", .. }
        ));
    }

    #[test]
    fn test_parse_day() {
        assert!(parse_day("offering_on", "2024-05-12").is_ok());
        assert!(parse_day("offering_on", "2024-13-40").is_err());
        assert!(parse_day("offering_on", "2024-05-12T00:00:00Z").is_err());
    }
}
