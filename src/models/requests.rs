//! Inbound request bodies, deserialized loosely so that field-level rules
//! can produce specific validation errors instead of a generic parse
//! failure. Filter sections reject unknown keys: the filterable column set
//! is closed and nothing outside it may reach query construction.

use serde::Deserialize;
use serde_json::Value;

/// POST /api/bhajan-signups body.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupQueryRequest {
    #[serde(default)]
    pub filters: Option<SignupFilters>,
    #[serde(default)]
    pub pagination: Option<PaginationRequest>,
    #[serde(default)]
    pub sort: Option<SortRequest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupFilters {
    // Stored column spelling, kept for wire compatibility
    #[serde(default, rename = "diety")]
    pub deity: Option<String>,
    #[serde(default)]
    pub tempo: Option<String>,
    #[serde(default, rename = "offeringStatus")]
    pub offering_status: Option<String>,
    // Raw JSON so a non-boolean can be reported as InvalidType rather than
    // failing the whole body parse
    #[serde(default, rename = "signedUp")]
    pub signed_up: Option<Value>,
    #[serde(default)]
    pub singer: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub offering_on: Option<String>,
}

/// POST /api/bhajans body.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogQueryRequest {
    #[serde(default)]
    pub filters: Option<CatalogFilters>,
    #[serde(default)]
    pub pagination: Option<PaginationRequest>,
}

/// Catalog filters are free text: the catalog's deity/tempo columns are not
/// enum-constrained.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFilters {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "diety")]
    pub deity: Option<String>,
    #[serde(default)]
    pub tempo: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// Raw JSON values so that a string "2" or a float 1.5 yields
/// InvalidPagination, not a body-level rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationRequest {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortRequest {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// POST /api/bhajan-signup/create body. Everything optional at parse time;
/// required-field enforcement happens in validation so all missing fields
/// can be reported together.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSignupRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub singer: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default, rename = "diety")]
    pub deity: Option<EnumValueField>,
    #[serde(default)]
    pub tempo: Option<EnumValueField>,
    #[serde(default)]
    pub offering_on: Option<String>,
    #[serde(default, rename = "offeringStatus")]
    pub offering_status: Option<String>,
    // Accepted but ignored: a created signup is always signed up
    #[serde(default, rename = "signedUp")]
    pub signed_up: Option<Value>,
}

/// Nested `{value}` shape used by the frontend for enum-tagged fields.
#[derive(Debug, Default, Deserialize)]
pub struct EnumValueField {
    #[serde(default)]
    pub value: Option<String>,
}
