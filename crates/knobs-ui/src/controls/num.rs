//! Single numeric input.

use super::impl_control_widget;
use crate::binding::Bindable;
use crate::control::{Control, Frame, notify_on_input, warn_on_err};
use crate::error::GuiResult;
use crate::mode::{Bound, Detached};
use crate::numeric::{clamp_to, decode_number, render_number, seed_clamped};
use knobs_dom::{ElementId, EventKind, Prop, Surface, listener};

/// Bounds and step of a [`Num`]. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumParams {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl NumParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp_to(value, self.min, self.max)
    }

    fn input_props(&self, value: f64) -> Vec<(&'static str, Prop)> {
        let mut props = Vec::with_capacity(5);
        for (name, bound) in [("min", self.min), ("max", self.max), ("step", self.step)] {
            if let Some(bound) = bound {
                props.push((name, Prop::from(bound)));
            }
        }
        props.push(("value", Prop::from(value)));
        props.push(("type", Prop::from("number")));
        props
    }
}

/// Numeric field.
///
/// Detached: never clamps, the value is whatever the input parses to (NaN
/// when empty). Bound: the source is clamped into `[min, max]` at
/// construction and on every edit.
#[derive(Debug, Clone)]
pub struct Num<M = Detached> {
    frame: Frame,
    input: ElementId,
    params: NumParams,
    mode: M,
}

impl_control_widget!(Num, Num);

impl<M> Num<M> {
    pub fn input(&self) -> ElementId {
        self.input
    }

    pub fn params(&self) -> NumParams {
        self.params
    }
}

impl Num<Detached> {
    /// Starts at `min`, or 0 when unbounded below.
    pub fn new(surface: &mut dyn Surface, label: &str, params: NumParams) -> GuiResult<Self> {
        let initial = params.min.unwrap_or(0.0);
        let input = surface.construct("input", &params.input_props(initial), Vec::new())?;
        let frame = Frame::new(surface, label, &[input])?;
        Ok(Self {
            frame,
            input,
            params,
            mode: Detached,
        })
    }
}

impl Control for Num<Detached> {
    type Value = f64;

    fn value(&self, surface: &dyn Surface) -> f64 {
        decode_number(surface, self.input)
    }

    fn set_value(&self, surface: &mut dyn Surface, value: f64) -> GuiResult<()> {
        render_number(surface, self.input, value)?;
        surface.dispatch(self.input, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(f64) + 'static,
    {
        notify_on_input(surface, self.input, decode_number, callback)
    }
}

impl Num<Bound<f64>> {
    pub fn bound(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<f64> + 'static,
        params: NumParams,
    ) -> GuiResult<Self> {
        let mode = Bound::new(source);
        let initial = seed_clamped(mode.source(), params.min, params.max)?;
        let input = surface.construct("input", &params.input_props(initial), Vec::new())?;
        let frame = Frame::new(surface, label, &[input])?;

        let source = mode.shared();
        surface.add_event_listener(
            input,
            EventKind::Input,
            listener(move |surface, event| {
                let raw = decode_number(&*surface, event.target);
                if raw.is_nan() {
                    tracing::debug!("Ignoring non-numeric edit on {}", event.target);
                    return;
                }
                let value = params.clamp(raw);
                if value != raw {
                    tracing::debug!("Clamped edit {} to {}", raw, value);
                    warn_on_err(
                        render_number(surface, event.target, value),
                        "Failed to render clamped value",
                    );
                }
                source.commit(value);
            }),
        )?;

        Ok(Self {
            frame,
            input,
            params,
            mode,
        })
    }

    /// Re-read the source and render it, clamping as at construction.
    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<f64> {
        let value = seed_clamped(self.mode.source(), self.params.min, self.params.max)?;
        render_number(surface, self.input, value)?;
        Ok(value)
    }

    pub fn binding(&self) -> &Bound<f64> {
        &self.mode
    }
}
