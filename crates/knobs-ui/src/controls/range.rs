//! Number field and slider kept in lock-step.

use super::impl_control_widget;
use crate::binding::Bindable;
use crate::control::{Control, Frame, SharedCallback, warn_on_err};
use crate::error::GuiResult;
use crate::mode::{Bound, Detached};
use crate::numeric::{clamp_to, decode_number, render_number, seed_clamped};
use knobs_dom::{ElementId, EventKind, Prop, Surface, listener};
use std::rc::Rc;

/// Bounds and step shared by both inputs of a [`Range`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeParams {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for RangeParams {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
        }
    }
}

impl RangeParams {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp_to(value, Some(self.min), Some(self.max))
    }

    fn input_props(&self, kind: &'static str, value: f64) -> [(&'static str, Prop); 5] {
        [
            ("min", Prop::from(self.min)),
            ("max", Prop::from(self.max)),
            ("step", Prop::from(self.step)),
            ("value", Prop::from(value)),
            ("type", Prop::from(kind)),
        ]
    }
}

/// A number input and a range input showing one value.
///
/// Editing either input re-renders the other before any listener or bound
/// source sees the new value.
#[derive(Debug, Clone)]
pub struct Range<M = Detached> {
    frame: Frame,
    number: ElementId,
    slider: ElementId,
    params: RangeParams,
    mode: M,
}

impl_control_widget!(Range, Range);

impl<M> Range<M> {
    pub fn number_input(&self) -> ElementId {
        self.number
    }

    pub fn slider(&self) -> ElementId {
        self.slider
    }

    pub fn params(&self) -> RangeParams {
        self.params
    }

    fn build(
        surface: &mut dyn Surface,
        label: &str,
        params: RangeParams,
        initial: f64,
    ) -> GuiResult<(Frame, ElementId, ElementId)> {
        let number = surface.construct("input", &params.input_props("number", initial), Vec::new())?;
        let slider = surface.construct("input", &params.input_props("range", initial), Vec::new())?;
        let frame = Frame::new(surface, label, &[number, slider])?;
        Ok((frame, number, slider))
    }

    fn render(&self, surface: &mut dyn Surface, value: f64) -> GuiResult<()> {
        render_number(surface, self.number, value)?;
        render_number(surface, self.slider, value)?;
        Ok(())
    }
}

/// Clamp an edit of `from` and render the result on both inputs.
///
/// Returns `None` for a non-numeric edit, which leaves both inputs as they are.
fn sync_edit(
    surface: &mut dyn Surface,
    from: ElementId,
    to: ElementId,
    params: RangeParams,
) -> Option<f64> {
    let raw = decode_number(&*surface, from);
    if raw.is_nan() {
        tracing::debug!("Ignoring non-numeric edit on {}", from);
        return None;
    }
    let value = params.clamp(raw);
    if value != raw {
        tracing::debug!("Clamped edit {} to {}", raw, value);
        warn_on_err(render_number(surface, from, value), "Failed to render clamped value");
    }
    warn_on_err(render_number(surface, to, value), "Failed to mirror range value");
    Some(value)
}

/// Keep `to` in step with every edit of `from`.
fn mirror(
    surface: &mut dyn Surface,
    from: ElementId,
    to: ElementId,
    params: RangeParams,
) -> GuiResult<()> {
    surface.add_event_listener(
        from,
        EventKind::Input,
        listener(move |surface, _| {
            sync_edit(surface, from, to, params);
        }),
    )?;
    Ok(())
}

/// Like [`mirror`], then commit the clamped value.
fn sync_and_commit(
    surface: &mut dyn Surface,
    from: ElementId,
    to: ElementId,
    params: RangeParams,
    source: Rc<dyn Bindable<f64>>,
) -> GuiResult<()> {
    surface.add_event_listener(
        from,
        EventKind::Input,
        listener(move |surface, _| {
            if let Some(value) = sync_edit(surface, from, to, params) {
                source.commit(value);
            }
        }),
    )?;
    Ok(())
}

impl Range<Detached> {
    /// Starts at `min`. Edits on either input are clamped to the bounds.
    pub fn new(surface: &mut dyn Surface, label: &str, params: RangeParams) -> GuiResult<Self> {
        let (frame, number, slider) = Self::build(surface, label, params, params.min)?;
        mirror(surface, number, slider, params)?;
        mirror(surface, slider, number, params)?;
        Ok(Self {
            frame,
            number,
            slider,
            params,
            mode: Detached,
        })
    }
}

impl Control for Range<Detached> {
    type Value = f64;

    /// The number input is authoritative.
    fn value(&self, surface: &dyn Surface) -> f64 {
        decode_number(surface, self.number)
    }

    fn set_value(&self, surface: &mut dyn Surface, value: f64) -> GuiResult<()> {
        self.render(surface, self.params.clamp(value))?;
        surface.dispatch(self.number, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(f64) + 'static,
    {
        let callback = SharedCallback::new(callback);
        let number = self.number;
        for input in [self.number, self.slider] {
            let callback = callback.clone();
            surface.add_event_listener(
                input,
                EventKind::Input,
                listener(move |surface, _| callback.call(decode_number(&*surface, number))),
            )?;
        }
        Ok(())
    }
}

impl Range<Bound<f64>> {
    pub fn bound(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<f64> + 'static,
        params: RangeParams,
    ) -> GuiResult<Self> {
        let mode = Bound::new(source);
        let initial = seed_clamped(mode.source(), Some(params.min), Some(params.max))?;
        let (frame, number, slider) = Self::build(surface, label, params, initial)?;
        sync_and_commit(surface, number, slider, params, mode.shared())?;
        sync_and_commit(surface, slider, number, params, mode.shared())?;
        Ok(Self {
            frame,
            number,
            slider,
            params,
            mode,
        })
    }

    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<f64> {
        let value = seed_clamped(self.mode.source(), Some(self.params.min), Some(self.params.max))?;
        self.render(surface, value)?;
        Ok(value)
    }

    pub fn binding(&self) -> &Bound<f64> {
        &self.mode
    }
}
