//! End-to-end scenarios: the built-in table applied to a synthetic host
//! document shaped like the real card-manager source.

use jokermig_core::{migrate_text, EntityOutcome};
use jokermig_data::builtin_table;

fn record(id: &str) -> String {
    format!(
        concat!(
            "        new SpecialCard\n",
            "        {{\n",
            "            id = \"{id}\",\n",
            "            cardName = \"Card {id}\",\n",
            "            price = 5,\n",
            "            // condition fields\n",
            "            conditionSuit = \"Hearts\",\n",
            "            conditionHandType = \"\",\n",
            "            conditionOperator = \"\",\n",
            "            conditionNumericValue = 0,\n",
            "            // effect fields\n",
            "            effectValue = 10,\n",
            "            effectNumericValue = 0,\n",
            "            effectShowVisual = true,\n",
            "            effectOnCard = true,\n",
            "            effects = new List<JokerEffect> {{ new JokerEffect {{ type = \"addMultiplier\", value = 10 }} }}\n",
            "        }},\n",
        ),
        id = id,
    )
}

fn document(ids: &[&str]) -> String {
    let mut out = String::from("    cards = new List<SpecialCard>\n    {\n");
    for id in ids {
        out.push_str(&record(id));
    }
    out.push_str("    };\n");
    out
}

fn converted_block<'a>(text: &'a str, id: &str) -> &'a str {
    let start = text.find(&format!("id = \"{}\"", id)).expect("id present");
    let end = text[start..]
        .find("new List<JokerEffect>()")
        .expect("emptied effects list")
        + start;
    &text[start..end]
}

#[test]
fn scenario_single_slot_suit_joker() {
    let text = document(&["joker_20"]);
    let (rewritten, report) = migrate_text(&builtin_table(), &text);
    assert_eq!(report.converted(), 1);
    assert_eq!(report.skipped(), 34);

    let block = converted_block(&rewritten, "joker_20");
    assert!(block.contains("conditionTypes = new List<ConditionType> {\n                ConditionType.CardSuit\n            },"));
    assert!(block.contains("effectTypes = new List<string> {\n                \"addMultiplier\"\n            },"));
    assert!(block.contains("effectValues = new List<float> { 10 },"));
    assert!(block.contains("effectOnCards = new List<bool> { true },"));
}

#[test]
fn scenario_two_slot_compound_condition() {
    let text = document(&["joker_32"]);
    let (rewritten, report) = migrate_text(&builtin_table(), &text);
    assert_eq!(report.converted(), 1);

    let block = converted_block(&rewritten, "joker_32");
    // Index 0 is the unconditional slot, index 1 the suit-count slot.
    assert!(block.contains(
        "conditionTypes = new List<ConditionType> {\n                ConditionType.Always,\n                ConditionType.UsedSuitCount\n            },"
    ));
    assert!(block.contains("conditionOperators = new List<string> { \"\", \"greater\" },"));
    assert!(block.contains("effectValues = new List<float> { 3, 3 },"));
    assert!(block.contains("effectShowVisuals = new List<bool> { true, true },"));
    assert!(block.contains(
        "effectTimings = new List<JokerEffectTiming> {\n                JokerEffectTiming.OnAfterScoring,\n                JokerEffectTiming.OnAfterScoring\n            },"
    ));
}

#[test]
fn scenario_absent_entity_completes_without_touching_the_buffer() {
    let text = document(&["joker_14"]);
    let (rewritten, report) = migrate_text(&builtin_table(), &text);
    assert_eq!(report.converted(), 1);
    assert_eq!(report.skipped(), 34);
    let joker_13_outcome = report
        .outcomes
        .iter()
        .find(|(id, _)| id == "joker_13")
        .map(|(_, outcome)| outcome.clone())
        .expect("joker_13 reported");
    assert_eq!(joker_13_outcome, EntityOutcome::Skipped);
    // Only joker_14's block changed; the wrapper text is intact.
    assert!(rewritten.starts_with("    cards = new List<SpecialCard>\n    {\n"));
    assert!(rewritten.ends_with("    };\n"));
}

#[test]
fn full_table_over_full_document_is_idempotent() {
    let ids: Vec<String> = (13..=47).map(|n| format!("joker_{}", n)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let text = document(&id_refs);
    let table = builtin_table();

    let (first_pass, first_report) = migrate_text(&table, &text);
    assert_eq!(first_report.converted(), 35);
    assert_eq!(first_report.skipped(), 0);

    let (second_pass, second_report) = migrate_text(&table, &first_pass);
    assert_eq!(second_report.converted(), 0);
    assert_eq!(second_report.skipped(), 35);
    assert_eq!(second_pass, first_pass);
}

#[test]
fn negative_chip_offset_renders_as_bare_integer() {
    // joker_28 carries effectNumericValues [-4] in the table.
    let text = document(&["joker_28"]);
    let (rewritten, _) = migrate_text(&builtin_table(), &text);
    let block = converted_block(&rewritten, "joker_28");
    assert!(block.contains("effectNumericValues = new List<float> { -4 },"));
    assert!(block.contains("effectTypes = new List<string> {\n                \"addChips\"\n            },"));
}
