//! The fixed domain enumerations and their derived icon lookups.
//!
//! Enumeration order is contract: distribution reports list members in
//! declaration order, so reordering a variant list is a breaking change.

/// Deity tag on a signup. The list is the superset observed across
/// revisions of the hosted tables ("Sai" arrived later than the rest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deity {
    Ganesha,
    Guru,
    Shiva,
    Devi,
    Rama,
    Krishna,
    Sai,
    SarvaDharma,
}

pub const FALLBACK_DEITY_ICON: &str = "🎵";

impl Deity {
    pub const ALL: [Deity; 8] = [
        Deity::Ganesha,
        Deity::Guru,
        Deity::Shiva,
        Deity::Devi,
        Deity::Rama,
        Deity::Krishna,
        Deity::Sai,
        Deity::SarvaDharma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Deity::Ganesha => "Ganesha",
            Deity::Guru => "Guru",
            Deity::Shiva => "Shiva",
            Deity::Devi => "Devi",
            Deity::Rama => "Rama",
            Deity::Krishna => "Krishna",
            Deity::Sai => "Sai",
            Deity::SarvaDharma => "Sarva Dharma",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Deity::Ganesha => "🐘",
            Deity::Guru => "🙏",
            Deity::Shiva => "🔱",
            Deity::Devi => "🌺",
            Deity::Rama => "🏹",
            Deity::Krishna => "🪈",
            Deity::Sai => "🕉️",
            Deity::SarvaDharma => "☸️",
        }
    }

    pub fn parse(value: &str) -> Option<Deity> {
        Deity::ALL.iter().copied().find(|d| d.as_str() == value)
    }
}

/// Tempo tag on a signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tempo {
    Slow,
    Medium,
    Fast,
}

pub const FALLBACK_TEMPO_ICON: &str = "🎵";

impl Tempo {
    pub const ALL: [Tempo; 3] = [Tempo::Slow, Tempo::Medium, Tempo::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tempo::Slow => "Slow",
            Tempo::Medium => "Medium",
            Tempo::Fast => "Fast",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tempo::Slow => "🐢",
            Tempo::Medium => "🚶",
            Tempo::Fast => "🚀",
        }
    }

    pub fn parse(value: &str) -> Option<Tempo> {
        Tempo::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

/// Scheduling state of a signup's offering slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferingStatus {
    Pending,
    Offered,
    Cancelled,
}

impl OfferingStatus {
    pub const ALL: [OfferingStatus; 3] = [
        OfferingStatus::Pending,
        OfferingStatus::Offered,
        OfferingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingStatus::Pending => "Pending",
            OfferingStatus::Offered => "Offered",
            OfferingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<OfferingStatus> {
        OfferingStatus::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
    }
}

/// Columns a signup query may sort by. Closed set: the sort column is bound
/// here at definition time, never taken verbatim from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Title,
    Position,
    Singer,
    OfferingOn,
    Tempo,
    Deity,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::CreatedAt,
        SortField::Title,
        SortField::Position,
        SortField::Singer,
        SortField::OfferingOn,
        SortField::Tempo,
        SortField::Deity,
    ];

    /// Wire name, which matches the column name (the hosted table kept the
    /// historical "diety" spelling).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Title => "title",
            SortField::Position => "position",
            SortField::Singer => "singer",
            SortField::OfferingOn => "offering_on",
            SortField::Tempo => "tempo",
            SortField::Deity => "diety",
        }
    }

    pub fn column(&self) -> &'static str {
        self.as_str()
    }

    pub fn parse(value: &str) -> Option<SortField> {
        SortField::ALL.iter().copied().find(|f| f.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<SortOrder> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// The process-wide vocabulary: legal-value lists plus icon lookups, built
/// once at startup and injected into validators and formatters rather than
/// referenced as ambient global state.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub deities: Vec<&'static str>,
    pub tempos: Vec<&'static str>,
    pub offering_statuses: Vec<&'static str>,
    pub sort_fields: Vec<&'static str>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            deities: Deity::ALL.iter().map(|d| d.as_str()).collect(),
            tempos: Tempo::ALL.iter().map(|t| t.as_str()).collect(),
            offering_statuses: OfferingStatus::ALL.iter().map(|s| s.as_str()).collect(),
            sort_fields: SortField::ALL.iter().map(|f| f.as_str()).collect(),
        }
    }

    /// Icon for a stored deity value, with the fallback glyph for anything
    /// outside the enumeration. Used for signup rows, where an icon is
    /// always present in the response.
    pub fn deity_icon(&self, value: &str) -> &'static str {
        Deity::parse(value)
            .map(|d| d.icon())
            .unwrap_or(FALLBACK_DEITY_ICON)
    }

    pub fn tempo_icon(&self, value: &str) -> &'static str {
        Tempo::parse(value)
            .map(|t| t.icon())
            .unwrap_or(FALLBACK_TEMPO_ICON)
    }

    /// Icon lookup for catalog rows, where deity/tempo are free text and an
    /// unmatched value gets no icon at all rather than a fallback glyph.
    pub fn deity_icon_opt(&self, value: &str) -> Option<&'static str> {
        Deity::parse(value).map(|d| d.icon())
    }

    pub fn tempo_icon_opt(&self, value: &str) -> Option<&'static str> {
        Tempo::parse(value).map(|t| t.icon())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deity_round_trip() {
        for deity in Deity::ALL {
            assert_eq!(Deity::parse(deity.as_str()), Some(deity));
        }
        assert_eq!(Deity::parse("Hanuman"), None);
    }

    #[test]
    fn test_tempo_icons() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.tempo_icon("Fast"), "🚀");
        assert_eq!(vocab.tempo_icon("Slow"), "🐢");
        // Unrecognized values fall back, never absent
        assert_eq!(vocab.tempo_icon("Allegro"), FALLBACK_TEMPO_ICON);
    }

    #[test]
    fn test_catalog_icon_has_no_fallback() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.deity_icon_opt("Krishna"), Some("🪈"));
        assert_eq!(vocab.deity_icon_opt("Lord Krishna"), None);
        assert_eq!(vocab.tempo_icon_opt("very fast"), None);
    }

    #[test]
    fn test_vocabulary_preserves_declaration_order() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.deities.first(), Some(&"Ganesha"));
        assert_eq!(vocab.deities.last(), Some(&"Sarva Dharma"));
        assert_eq!(vocab.tempos, vec!["Slow", "Medium", "Fast"]);
    }

    #[test]
    fn test_sort_field_uses_stored_column_spelling() {
        assert_eq!(SortField::Deity.column(), "diety");
        assert_eq!(SortField::parse("diety"), Some(SortField::Deity));
        assert_eq!(SortField::parse("deity"), None);
    }

    #[test]
    fn test_sort_order_is_strict() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("ASC"), None);
        assert_eq!(SortOrder::parse("ascending"), None);
    }
}
