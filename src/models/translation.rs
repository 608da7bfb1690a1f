//! Row-to-response formatting. Pure: authoritative fields pass through
//! untouched, icons are derived from the injected vocabulary and never read
//! from storage.

use crate::domain::vocabulary::Vocabulary;
use crate::models::responses::{FormattedCatalogEntry, FormattedSignup, TaggedValue};
use crate::models::rows::{CatalogRow, SignupRow};

pub fn format_signup(row: SignupRow, vocab: &Vocabulary) -> FormattedSignup {
    let tempo_icon = vocab.tempo_icon(&row.tempo);
    let deity_icon = vocab.deity_icon(&row.diety);

    FormattedSignup {
        id: row.id,
        created_at: row.created_at,
        title: row.title,
        position: row.position,
        singer: row.singer,
        details: row.details,
        signed_up: row.signed_up,
        tempo: TaggedValue {
            value: row.tempo,
            icon: Some(tempo_icon.to_string()),
        },
        diety: TaggedValue {
            value: row.diety,
            icon: Some(deity_icon.to_string()),
        },
        offering_on: row.offering_on,
        offering_status: row.offering_status,
    }
}

pub fn format_catalog_entry(row: CatalogRow, vocab: &Vocabulary) -> FormattedCatalogEntry {
    let deity = row.diety.map(|value| {
        let icon = vocab.deity_icon_opt(&value).map(|i| i.to_string());
        TaggedValue { value, icon }
    });
    let tempo = row.tempo.map(|value| {
        let icon = vocab.tempo_icon_opt(&value).map(|i| i.to_string());
        TaggedValue { value, icon }
    });

    FormattedCatalogEntry {
        id: row.id,
        title: row.title,
        lyrics: row.lyrics,
        meaning: row.meaning,
        diety: deity,
        tempo,
        language: row.language,
        level: row.level,
        raga: row.raga,
        beat: row.beat,
        male_pitch: row.male_pitch,
        female_pitch: row.female_pitch,
        lyrics_link: row.lyrics_link,
        audio_link: row.audio_link,
    }
}
