//! Native element behaviour: which keys are properties, and how input values
//! are sanitized.

use crate::element::{Prop, format_number, parse_number};
use indexmap::IndexMap;

const DEFAULT_RANGE_MIN: f64 = 0.0;
const DEFAULT_RANGE_MAX: f64 = 100.0;
const DEFAULT_COLOR: &str = "#000000";

/// Whether `name` is a writable native property of `tag`.
pub(crate) fn is_native_property(tag: &str, name: &str) -> bool {
    let per_tag = match tag {
        "input" => matches!(
            name,
            "value" | "checked" | "type" | "min" | "max" | "step" | "disabled" | "placeholder"
        ),
        "select" => matches!(name, "value" | "disabled"),
        "option" => matches!(name, "value" | "selected" | "disabled"),
        "button" => matches!(name, "disabled" | "type"),
        _ => false,
    };
    per_tag || matches!(name, "id" | "title" | "hidden")
}

pub(crate) fn is_boolean_property(name: &str) -> bool {
    matches!(name, "checked" | "disabled" | "selected" | "hidden")
}

/// Properties whose assignment re-runs input value sanitization.
pub(crate) fn affects_input_value(name: &str) -> bool {
    matches!(name, "value" | "type" | "min" | "max" | "step")
}

/// Elements that never have children or a closing tag.
pub(crate) fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "hr" | "img")
}

pub(crate) fn normalize(name: &str, value: Prop) -> Prop {
    if is_boolean_property(name) {
        Prop::Bool(value.as_bool())
    } else {
        Prop::Text(value.to_text())
    }
}

/// Apply the value sanitization algorithm of the input's current type.
pub(crate) fn sanitize_input(properties: &mut IndexMap<String, Prop>) {
    let kind = properties
        .get("type")
        .map(|prop| prop.to_text().to_ascii_lowercase())
        .unwrap_or_else(|| "text".to_string());
    let current = properties.get("value").map(Prop::to_text);

    let sanitized = match kind.as_str() {
        "number" => current.map(|value| {
            if parse_number(&value).is_some() {
                value
            } else {
                String::new()
            }
        }),
        "range" => Some(sanitize_range(current.as_deref(), properties)),
        "color" => Some(sanitize_color(current.as_deref().unwrap_or(""))),
        _ => current,
    };

    if let Some(value) = sanitized {
        properties.insert("value".to_string(), Prop::Text(value));
    }
}

fn bound(properties: &IndexMap<String, Prop>, name: &str) -> Option<f64> {
    properties
        .get(name)
        .and_then(|prop| parse_number(&prop.to_text()))
}

fn sanitize_range(value: Option<&str>, properties: &IndexMap<String, Prop>) -> String {
    let min = bound(properties, "min").unwrap_or(DEFAULT_RANGE_MIN);
    let max = bound(properties, "max").unwrap_or(DEFAULT_RANGE_MAX).max(min);
    let value = value
        .and_then(parse_number)
        .unwrap_or(min + (max - min) / 2.0);
    format_number(value.clamp(min, max))
}

fn sanitize_color(value: &str) -> String {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        value.to_ascii_lowercase()
    } else {
        DEFAULT_COLOR.to_string()
    }
}
