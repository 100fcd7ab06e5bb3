//! Shared numeric plumbing for `Num` and `Range`.

use crate::binding::Bindable;
use crate::error::GuiResult;
use knobs_dom::{DomResult, ElementId, Surface, format_number, parse_number};

/// Clamp into the optional bounds. `min` wins when the bounds cross; NaN is
/// passed through untouched.
pub(crate) fn clamp_to(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut value = value;
    if let Some(max) = max {
        if value > max {
            value = max;
        }
    }
    if let Some(min) = min {
        if value < min {
            value = min;
        }
    }
    value
}

/// Numeric value of an input, NaN when it holds no number.
pub(crate) fn decode_number(surface: &dyn Surface, input: ElementId) -> f64 {
    parse_number(&surface.value(input)).unwrap_or(f64::NAN)
}

pub(crate) fn render_number(surface: &mut dyn Surface, input: ElementId, value: f64) -> DomResult<()> {
    surface.set_value(input, &format_number(value))
}

/// Read a numeric source, clamp it and write the clamped value back so the
/// source and the display never disagree.
pub(crate) fn seed_clamped(
    source: &dyn Bindable<f64>,
    min: Option<f64>,
    max: Option<f64>,
) -> GuiResult<f64> {
    let raw = source.read()?;
    let clamped = clamp_to(raw, min, max);
    if !raw.is_nan() && clamped != raw {
        tracing::debug!("Clamped bound value {} to {}", raw, clamped);
        source.commit(clamped);
    }
    Ok(clamped)
}
