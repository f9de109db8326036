use crate::locator::locate;
use crate::schema::ConversionTable;
use crate::serialize::render_slots;

/// What happened to one table entry during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityOutcome {
    Converted,
    /// Block not located: the id is absent or the record was already
    /// migrated. Non-fatal.
    Skipped,
    /// Descriptor failed validation; the record was left untouched.
    Invalid(String),
}

/// Per-entity outcomes in table order.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub outcomes: Vec<(String, EntityOutcome)>,
}

impl MigrationReport {
    pub fn converted(&self) -> usize {
        self.count(|outcome| matches!(outcome, EntityOutcome::Converted))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, EntityOutcome::Skipped))
    }

    pub fn invalid(&self) -> usize {
        self.count(|outcome| matches!(outcome, EntityOutcome::Invalid(_)))
    }

    fn count(&self, matches: impl Fn(&EntityOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches(outcome))
            .count()
    }
}

/// Run the full migration over `input`, one table entry at a time in table
/// order. Each substitution operates on the accumulated buffer; text outside
/// the matched regions is preserved verbatim.
pub fn migrate_text(table: &ConversionTable, input: &str) -> (String, MigrationReport) {
    let mut buffer = input.to_string();
    let mut report = MigrationReport::default();
    for entry in table.iter() {
        let slots = match entry.descriptor.slot_count(&entry.id) {
            Ok(slots) => slots,
            Err(err) => {
                report
                    .outcomes
                    .push((entry.id.clone(), EntityOutcome::Invalid(err.to_string())));
                continue;
            }
        };
        let Some(block) = locate(&buffer, &entry.id) else {
            report
                .outcomes
                .push((entry.id.clone(), EntityOutcome::Skipped));
            continue;
        };
        let rendered = render_slots(&entry.descriptor, slots, &block.indent);
        let mut replacement = String::with_capacity(rendered.len() + 1);
        replacement.push('\n');
        replacement.push_str(&rendered);
        buffer.replace_range(block.region_start..block.region_end, &replacement);
        report
            .outcomes
            .push((entry.id.clone(), EntityOutcome::Converted));
    }
    (buffer, report)
}
