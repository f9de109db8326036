use crate::error::MigrateError;
use serde::{Deserialize, Serialize};

/// Condition discriminators the joker table uses. Rendered into the host
/// file as `ConditionType.<member>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    Always,
    HandType,
    UnUsedHandType,
    HasTriple,
    CardSuit,
    UsedSuitCount,
    UnUsedSuitCount,
    UsedAceCount,
    RemainingSevens,
    RemainingDeck,
    RemainingDiscards,
    IsEvenRank,
}

impl ConditionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::HandType => "HandType",
            Self::UnUsedHandType => "UnUsedHandType",
            Self::HasTriple => "HasTriple",
            Self::CardSuit => "CardSuit",
            Self::UsedSuitCount => "UsedSuitCount",
            Self::UnUsedSuitCount => "UnUsedSuitCount",
            Self::UsedAceCount => "UsedAceCount",
            Self::RemainingSevens => "RemainingSevens",
            Self::RemainingDeck => "RemainingDeck",
            Self::RemainingDiscards => "RemainingDiscards",
            Self::IsEvenRank => "IsEvenRank",
        }
    }
}

/// When a slot's effect fires. Rendered as `JokerEffectTiming.<member>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTiming {
    #[default]
    OnAfterScoring,
}

impl EffectTiming {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnAfterScoring => "OnAfterScoring",
        }
    }
}

/// Index-aligned field sequences describing one entity's effects. Index `i`
/// across every sequence is one (condition, effect) slot; all sequences must
/// agree on the slot count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDescriptor {
    pub condition_types: Vec<ConditionType>,
    /// Empty means every slot defaults to `OnAfterScoring`.
    #[serde(default)]
    pub effect_timings: Vec<EffectTiming>,
    pub effect_types: Vec<String>,
    pub effect_values: Vec<f64>,
    pub effect_numeric_values: Vec<f64>,
    pub effect_show_visuals: Vec<bool>,
    pub effect_on_cards: Vec<bool>,
    pub condition_values: Vec<String>,
    pub condition_operators: Vec<String>,
    pub condition_numeric_values: Vec<f64>,
}

impl EffectDescriptor {
    /// Number of slots, after checking that every sequence agrees on it.
    /// `id` only labels the error.
    pub fn slot_count(&self, id: &str) -> Result<usize, MigrateError> {
        let slots = self.condition_types.len();
        if slots == 0 {
            return Err(MigrateError::Validation {
                id: id.to_string(),
                details: "conditionTypes is empty".to_string(),
            });
        }
        let lens = [
            ("effectTypes", self.effect_types.len()),
            ("effectValues", self.effect_values.len()),
            ("effectNumericValues", self.effect_numeric_values.len()),
            ("effectShowVisuals", self.effect_show_visuals.len()),
            ("effectOnCards", self.effect_on_cards.len()),
            ("conditionValues", self.condition_values.len()),
            ("conditionOperators", self.condition_operators.len()),
            ("conditionNumericValues", self.condition_numeric_values.len()),
        ];
        let mut mismatched: Vec<String> = lens
            .iter()
            .filter(|(_, len)| *len != slots)
            .map(|(name, len)| format!("{}={}", name, len))
            .collect();
        if !self.effect_timings.is_empty() && self.effect_timings.len() != slots {
            mismatched.push(format!("effectTimings={}", self.effect_timings.len()));
        }
        if !mismatched.is_empty() {
            return Err(MigrateError::Validation {
                id: id.to_string(),
                details: format!("conditionTypes={} vs {}", slots, mismatched.join(", ")),
            });
        }
        Ok(slots)
    }

    /// Timing for slot `index`, falling back to the default when the table
    /// does not spell timings out.
    pub fn timing(&self, index: usize) -> EffectTiming {
        self.effect_timings.get(index).copied().unwrap_or_default()
    }
}

/// One conversion-table entry: entity id plus its target descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionEntry {
    pub id: String,
    #[serde(flatten)]
    pub descriptor: EffectDescriptor,
}

/// Ordered id -> descriptor mapping. Declaration order governs rewrite and
/// report order.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    pub entries: Vec<ConversionEntry>,
}

impl ConversionTable {
    pub fn new(entries: Vec<ConversionEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&EffectDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.descriptor)
    }
}
