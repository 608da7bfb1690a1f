//! In-process grouping for the distribution reports.
//!
//! Output is zero-filled and enumeration-ordered: every known member
//! appears exactly once, in declaration order, so consumers can render a
//! complete chart without patching in missing categories.

use crate::domain::vocabulary::{Deity, Tempo};
use crate::models::rows::GroupingRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionEntry {
    pub value: &'static str,
    pub icon: &'static str,
    pub count: i64,
}

pub fn deity_distribution(rows: &[GroupingRow]) -> Vec<DistributionEntry> {
    let members: Vec<(&'static str, &'static str)> =
        Deity::ALL.iter().map(|d| (d.as_str(), d.icon())).collect();
    count_by_member(rows, &members)
}

pub fn tempo_distribution(rows: &[GroupingRow]) -> Vec<DistributionEntry> {
    let members: Vec<(&'static str, &'static str)> =
        Tempo::ALL.iter().map(|t| (t.as_str(), t.icon())).collect();
    count_by_member(rows, &members)
}

/// Counts signed-up rows per member. Rows whose value matches no member are
/// skipped silently (historical data may carry retired spellings).
fn count_by_member(
    rows: &[GroupingRow],
    members: &[(&'static str, &'static str)],
) -> Vec<DistributionEntry> {
    let mut counts = vec![0i64; members.len()];

    for row in rows {
        if !row.signed_up {
            continue;
        }
        let Some(value) = &row.value else { continue };
        if let Some(idx) = members.iter().position(|(name, _)| *name == value.as_str()) {
            counts[idx] += 1;
        }
    }

    members
        .iter()
        .zip(counts)
        .map(|(&(value, icon), count)| DistributionEntry { value, icon, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(value: &str, signed_up: bool) -> GroupingRow {
        GroupingRow {
            value: Some(value.to_string()),
            signed_up,
        }
    }

    #[test]
    fn test_every_member_present_in_enum_order_even_when_empty() {
        let entries = deity_distribution(&[]);

        assert_eq!(entries.len(), Deity::ALL.len());
        assert!(entries.iter().all(|e| e.count == 0));
        assert_eq!(entries[0].value, "Ganesha");
        assert_eq!(entries[7].value, "Sarva Dharma");
    }

    #[test]
    fn test_counts_only_signed_up_rows() {
        let rows = vec![
            row("Krishna", true),
            row("Krishna", true),
            row("Krishna", false),
            row("Rama", true),
        ];
        let entries = deity_distribution(&rows);

        let krishna = entries.iter().find(|e| e.value == "Krishna").unwrap();
        assert_eq!(krishna.count, 2);
        let rama = entries.iter().find(|e| e.value == "Rama").unwrap();
        assert_eq!(rama.count, 1);
    }

    #[test]
    fn test_unknown_values_are_silently_skipped() {
        let rows = vec![
            row("Fast", true),
            row("Adagio", true),
            GroupingRow {
                value: None,
                signed_up: true,
            },
        ];
        let entries = tempo_distribution(&rows);

        let total: i64 = entries.iter().map(|e| e.count).sum();
        assert_eq!(total, 1);
        assert_eq!(
            entries.iter().find(|e| e.value == "Fast").unwrap().count,
            1
        );
    }

    #[test]
    fn test_entries_carry_icons() {
        let entries = tempo_distribution(&[row("Fast", true)]);
        assert_eq!(entries[2].value, "Fast");
        assert_eq!(entries[2].icon, "🚀");
        assert_eq!(entries[0].icon, "🐢");
    }

    #[test]
    fn test_counts_sum_matches_known_signed_up_rows() {
        let rows = vec![
            row("Slow", true),
            row("Medium", true),
            row("Fast", true),
            row("Fast", true),
            row("Unknown", true),
            row("Slow", false),
        ];
        let entries = tempo_distribution(&rows);
        let total: i64 = entries.iter().map(|e| e.count).sum();
        assert_eq!(total, 4);
    }
}
