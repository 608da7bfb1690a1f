//! Raw database rows, mapped 1:1 onto the hosted tables.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// `bhajan_signups` table. The table also carries legacy `tempo_icon` and
/// `diety_icon` columns; they are never selected — icons are derived at the
/// formatting boundary so the stored copies cannot drift into responses.
#[derive(Debug, Clone, FromRow)]
pub struct SignupRow {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub position: i32,
    pub singer: Option<String>,
    pub details: Option<String>,
    pub signed_up: bool,
    pub tempo: String,
    pub diety: String,
    pub offering_on: Option<DateTime<Utc>>,
    pub offering_status: String,
}

pub const SIGNUP_COLUMNS: &str = "id, created_at, title, position, singer, details, \
     signed_up, tempo, diety, offering_on, offering_status";

/// `bhajans` catalog table. Deity and tempo are free text here, not
/// enum-constrained.
#[derive(Debug, Clone, FromRow)]
pub struct CatalogRow {
    pub id: String,
    pub title: String,
    pub lyrics: Option<String>,
    pub meaning: Option<String>,
    pub diety: Option<String>,
    pub tempo: Option<String>,
    pub language: Option<String>,
    pub level: Option<String>,
    pub raga: Option<String>,
    pub beat: Option<String>,
    pub male_pitch: Option<String>,
    pub female_pitch: Option<String>,
    pub lyrics_link: Option<String>,
    pub audio_link: Option<String>,
}

pub const CATALOG_COLUMNS: &str = "id, title, lyrics, meaning, diety, tempo, language, \
     level, raga, beat, male_pitch, female_pitch, lyrics_link, audio_link";

/// Projection used by the distribution reports: the grouping column aliased
/// to `value`, plus the signed-up flag.
#[derive(Debug, Clone, FromRow)]
pub struct GroupingRow {
    pub value: Option<String>,
    pub signed_up: bool,
}
