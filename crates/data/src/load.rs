use anyhow::{bail, Context};
use jokermig_core::{ConversionEntry, ConversionTable};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_JSON: &[u8] = include_bytes!("../conversions.json");

/// The built-in conversion table for `joker_13`..`joker_47`, embedded from
/// `conversions.json`.
pub fn builtin_table() -> ConversionTable {
    load_table_slice(BUILTIN_JSON).expect("built-in conversions.json must be valid")
}

/// Load a conversion table from a JSON file at `path`.
pub fn load_table(path: &Path) -> anyhow::Result<ConversionTable> {
    let raw = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    load_table_slice(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Parse `bytes` as an ordered array of conversion entries, rejecting
/// duplicate ids and descriptors that break the slot-length invariant.
pub fn load_table_slice(bytes: &[u8]) -> anyhow::Result<ConversionTable> {
    let entries: Vec<ConversionEntry> =
        serde_json::from_slice(bytes).context("parse conversion table JSON")?;
    let mut seen = HashSet::new();
    for entry in &entries {
        let id = entry.id.trim();
        if id.is_empty() {
            bail!("conversion entry id cannot be empty");
        }
        if !seen.insert(id.to_string()) {
            bail!("duplicate conversion entry {}", id);
        }
        entry.descriptor.slot_count(id)?;
    }
    Ok(ConversionTable::new(entries))
}
