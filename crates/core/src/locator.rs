use crate::host::FieldScanner;

/// Field names of the old single-effect schema. The first of these inside a
/// record opens the region the rewriter replaces; the `effects` list closes
/// it.
const LEGACY_FIELDS: &[&str] = &[
    "conditionSuit",
    "conditionHandType",
    "conditionOperator",
    "conditionNumericValue",
    "effectValue",
    "effectNumericValue",
    "effectShowVisual",
    "effectOnCard",
    "effects",
];

/// The contiguous region of one entity's old-schema field declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBlock {
    /// Start of the replaced region: the leading trivia of the first legacy
    /// field, just past the preceding field's comma.
    pub region_start: usize,
    /// One past the closing brace of the old `effects` list.
    pub region_end: usize,
    /// Indentation of the line carrying the id declaration.
    pub indent: String,
}

/// Locate `entity_id`'s old-schema block inside `text`. First match wins.
///
/// Returns `None` when the id is not declared, the record closes before an
/// `effects` field, or the effects list is no longer brace-initialized
/// (the record was already migrated).
pub fn locate(text: &str, entity_id: &str) -> Option<EntityBlock> {
    let needle = format!("id = \"{}\"", entity_id);
    let anchor = find_anchor(text, &needle)?;

    let line_start = text[..anchor].rfind('\n').map(|idx| idx + 1).unwrap_or(0);
    let indent: String = text[line_start..anchor]
        .chars()
        .take_while(|ch| ch.is_whitespace())
        .collect();

    let mut scanner = FieldScanner::new(text, anchor);
    let first = scanner.next_field()?;
    if first.name != "id" {
        return None;
    }

    let mut region_start = None;
    while let Some(field) = scanner.next_field() {
        if region_start.is_none() && LEGACY_FIELDS.contains(&field.name) {
            region_start = Some(field.trivia_start);
        }
        if field.name == "effects" {
            if !field.value.starts_with("new List<JokerEffect>") || !field.value.contains('{') {
                return None;
            }
            return Some(EntityBlock {
                region_start: region_start.unwrap_or(field.trivia_start),
                region_end: field.value_end,
                indent,
            });
        }
    }
    None
}

/// First occurrence of `needle` that is not the tail of a longer identifier
/// (`cardid = "…"` must not anchor an `id` search).
fn find_anchor(text: &str, needle: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(needle) {
        let at = from + offset;
        let at_boundary = at == 0 || {
            let before = text.as_bytes()[at - 1];
            !(before.is_ascii_alphanumeric() || before == b'_')
        };
        if at_boundary {
            return Some(at);
        }
        from = at + needle.len();
    }
    None
}
