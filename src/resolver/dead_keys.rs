//! Dead-key composition tables.

use crate::resolver::actions::{is_composable, ActionResolution};
use indexmap::IndexMap;

/// Dead-key glyph → `(base, composed)` pairs in encounter order.
pub type CompositionTable = IndexMap<String, Vec<(String, String)>>;

/// Groups every composable action record under the glyph of its state.
///
/// A record qualifies when it outputs a codepoint, has a base character and
/// its state belongs to a registered dead key. Dead keys without any
/// qualifying record get no entry.
#[must_use]
pub fn build_composition_table(resolution: &ActionResolution) -> CompositionTable {
    let mut table = CompositionTable::new();

    for record in resolution.records.iter().filter(|r| is_composable(r)) {
        let Some(glyph) = resolution.glyph_for_state(&record.action.state) else {
            continue;
        };
        if let (Some(base), Some(composed)) = (&record.base, &record.action.result) {
            table
                .entry(glyph.to_string())
                .or_default()
                .push((base.clone(), composed.clone()));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionDefinition;
    use crate::resolver::actions::resolve_actions;

    fn pair(base: &str, composed: &str) -> (String, String) {
        (base.to_string(), composed.to_string())
    }

    #[test]
    fn test_circumflex_table() {
        let resolution = resolve_actions(&[
            ActionDefinition::output("a", "none", "0061"),
            ActionDefinition::output("a", "s1", "00e2"),
            ActionDefinition::next("circ", "none", "s1"),
            ActionDefinition::output("space", "none", "0020"),
            ActionDefinition::output("space", "s1", "0302"),
        ]);
        let table = build_composition_table(&resolution);

        assert_eq!(table.len(), 1);
        assert_eq!(table["0302"], vec![pair("0061", "00e2"), pair("0020", "0302")]);
    }

    #[test]
    fn test_pairs_keep_encounter_order() {
        let resolution = resolve_actions(&[
            ActionDefinition::output("space", "none", "0020"),
            ActionDefinition::output("space", "s1", "0060"),
            ActionDefinition::output("space", "s2", "00b4"),
            ActionDefinition::output("e", "none", "0065"),
            ActionDefinition::output("e", "s2", "00e9"),
            ActionDefinition::output("e", "s1", "00e8"),
            ActionDefinition::output("a", "none", "0061"),
            ActionDefinition::output("a", "s1", "00e0"),
        ]);
        let table = build_composition_table(&resolution);

        let glyphs: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(glyphs, vec!["0060", "00b4"]);
        assert_eq!(
            table["0060"],
            vec![pair("0020", "0060"), pair("0065", "00e8"), pair("0061", "00e0")]
        );
        assert_eq!(table["00b4"], vec![pair("0020", "00b4"), pair("0065", "00e9")]);
    }

    #[test]
    fn test_records_without_base_are_skipped() {
        let resolution = resolve_actions(&[
            ActionDefinition::output("space", "none", "0020"),
            ActionDefinition::output("space", "s1", "0060"),
            // No none-state output, so no base character
            ActionDefinition::output("x", "s1", "1e8b"),
        ]);
        let table = build_composition_table(&resolution);
        assert_eq!(table["0060"], vec![pair("0020", "0060")]);
    }

    #[test]
    fn test_chained_transitions_are_not_composed() {
        let resolution = resolve_actions(&[
            ActionDefinition::output("space", "none", "0020"),
            ActionDefinition::output("space", "s1", "0060"),
            ActionDefinition::next("circ", "none", "s1"),
            ActionDefinition::next("circ", "s1", "s2"),
        ]);
        let table = build_composition_table(&resolution);
        assert_eq!(table["0060"].len(), 1);
    }

    #[test]
    fn test_no_dead_keys_no_table() {
        let resolution = resolve_actions(&[ActionDefinition::output("a", "none", "0061")]);
        assert!(build_composition_table(&resolution).is_empty());
    }
}
