//! Outbound response shapes. Field names (including the historical `diety`
//! spelling) are the wire contract.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// An enum-tagged field wrapped with its derived icon. For signup rows the
/// icon is always present (fallback glyph for unknown values); for catalog
/// rows it is `null` when the free text matches no enumeration member.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaggedValue {
    pub value: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedSignup {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub position: i32,
    pub singer: Option<String>,
    pub details: Option<String>,
    #[serde(rename = "signedUp")]
    pub signed_up: bool,
    pub tempo: TaggedValue,
    pub diety: TaggedValue,
    pub offering_on: Option<DateTime<Utc>>,
    #[serde(rename = "offeringStatus")]
    pub offering_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedCatalogEntry {
    pub id: String,
    pub title: String,
    pub lyrics: Option<String>,
    pub meaning: Option<String>,
    pub diety: Option<TaggedValue>,
    pub tempo: Option<TaggedValue>,
    pub language: Option<String>,
    pub level: Option<String>,
    pub raga: Option<String>,
    pub beat: Option<String>,
    #[serde(rename = "malePitch")]
    pub male_pitch: Option<String>,
    #[serde(rename = "femalePitch")]
    pub female_pitch: Option<String>,
    #[serde(rename = "lyricsLink")]
    pub lyrics_link: Option<String>,
    #[serde(rename = "audioLink")]
    pub audio_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupQueryResponse {
    pub data: Vec<FormattedSignup>,
    pub total: i64,
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    pub debug: Value,
}

#[derive(Debug, Serialize)]
pub struct CatalogQueryResponse {
    pub data: Vec<FormattedCatalogEntry>,
    pub total: i64,
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateSignupResponse {
    pub data: FormattedSignup,
    pub debug: Value,
}

#[derive(Debug, Serialize)]
pub struct DeityCount {
    pub diety: &'static str,
    pub icon: &'static str,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct TempoCount {
    pub tempo: &'static str,
    pub icon: &'static str,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse<T> {
    pub status: &'static str,
    pub data: Vec<T>,
    pub filters: Value,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(rename = "validDieties")]
    pub valid_dieties: Vec<&'static str>,
    #[serde(rename = "validTempos")]
    pub valid_tempos: Vec<&'static str>,
    #[serde(rename = "validOfferingStatuses")]
    pub valid_offering_statuses: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ConnectionProbeResponse {
    pub status: &'static str,
    pub database: String,
    #[serde(rename = "roundTripMs")]
    pub round_trip_ms: u128,
}
