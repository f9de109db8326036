use crate::error::MigrateError;
use crate::schema::EffectDescriptor;

/// Render `value` as a host numeric literal. Integral values stay bare
/// integers; anything else renders in decimal with the float suffix.
pub fn numeric_literal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}f", value)
    }
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Render the full new-schema field block for one entity at `indent`,
/// validating the slot-length invariant first. The output carries no leading
/// newline and no trailing comma; the rewriter splices it between the
/// preceding field's separator and the record's remaining text.
pub fn render_fields(
    id: &str,
    descriptor: &EffectDescriptor,
    indent: &str,
) -> Result<String, MigrateError> {
    let slots = descriptor.slot_count(id)?;
    Ok(render_slots(descriptor, slots, indent))
}

/// Render a descriptor already known to hold `slots` aligned slots.
pub(crate) fn render_slots(descriptor: &EffectDescriptor, slots: usize, indent: &str) -> String {
    let mut out = String::new();

    push_line(&mut out, indent, "// single-value compatibility fields (neutral defaults)");
    push_line(&mut out, indent, "conditionSuit = \"\",");
    push_line(&mut out, indent, "conditionHandType = \"\",");
    push_line(&mut out, indent, "conditionOperator = \"\",");
    push_line(&mut out, indent, "conditionNumericValue = 0,");
    push_line(&mut out, indent, "effectValue = 0,");
    push_line(&mut out, indent, "effectNumericValue = 0,");
    push_line(&mut out, indent, "effectShowVisual = true,");
    push_line(&mut out, indent, "effectOnCard = false,");
    out.push('\n');

    push_line(&mut out, indent, "// multi-effect fields, one element per slot");
    multiline_list(
        &mut out,
        indent,
        "effectTimings",
        "JokerEffectTiming",
        &(0..slots)
            .map(|index| format!("JokerEffectTiming.{}", descriptor.timing(index).as_str()))
            .collect::<Vec<_>>(),
    );
    multiline_list(
        &mut out,
        indent,
        "effectTypes",
        "string",
        &descriptor
            .effect_types
            .iter()
            .map(|value| quoted(value))
            .collect::<Vec<_>>(),
    );
    inline_list(
        &mut out,
        indent,
        "effectValues",
        "float",
        &numeric_items(&descriptor.effect_values),
    );
    inline_list(
        &mut out,
        indent,
        "effectNumericValues",
        "float",
        &numeric_items(&descriptor.effect_numeric_values),
    );
    inline_list(
        &mut out,
        indent,
        "effectShowVisuals",
        "bool",
        &bool_items(&descriptor.effect_show_visuals),
    );
    inline_list(
        &mut out,
        indent,
        "effectOnCards",
        "bool",
        &bool_items(&descriptor.effect_on_cards),
    );
    multiline_list(
        &mut out,
        indent,
        "conditionTypes",
        "ConditionType",
        &descriptor
            .condition_types
            .iter()
            .map(|value| format!("ConditionType.{}", value.as_str()))
            .collect::<Vec<_>>(),
    );
    inline_list(
        &mut out,
        indent,
        "conditionValues",
        "string",
        &descriptor
            .condition_values
            .iter()
            .map(|value| quoted(value))
            .collect::<Vec<_>>(),
    );
    inline_list(
        &mut out,
        indent,
        "conditionOperators",
        "string",
        &descriptor
            .condition_operators
            .iter()
            .map(|value| quoted(value))
            .collect::<Vec<_>>(),
    );
    inline_list(
        &mut out,
        indent,
        "conditionNumericValues",
        "float",
        &numeric_items(&descriptor.condition_numeric_values),
    );
    out.push('\n');

    push_line(&mut out, indent, "// legacy effect list, emptied by the migration");
    out.push_str(indent);
    out.push_str("effects = new List<JokerEffect>()");
    out
}

fn numeric_items(values: &[f64]) -> Vec<String> {
    values.iter().map(|value| numeric_literal(*value)).collect()
}

fn bool_items(values: &[bool]) -> Vec<String> {
    values
        .iter()
        .map(|value| bool_literal(*value).to_string())
        .collect()
}

fn push_line(out: &mut String, indent: &str, line: &str) {
    out.push_str(indent);
    out.push_str(line);
    out.push('\n');
}

fn inline_list(out: &mut String, indent: &str, name: &str, element_type: &str, items: &[String]) {
    push_line(
        out,
        indent,
        &format!("{} = new List<{}> {{ {} }},", name, element_type, items.join(", ")),
    );
}

fn multiline_list(out: &mut String, indent: &str, name: &str, element_type: &str, items: &[String]) {
    push_line(out, indent, &format!("{} = new List<{}> {{", name, element_type));
    for (index, item) in items.iter().enumerate() {
        let separator = if index + 1 < items.len() { "," } else { "" };
        push_line(out, &format!("{}    ", indent), &format!("{}{}", item, separator));
    }
    push_line(out, indent, "},");
}
