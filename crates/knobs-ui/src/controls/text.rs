//! Free text input.

use super::impl_control_widget;
use crate::binding::Bindable;
use crate::control::{Control, Frame, commit_on_input, notify_on_input};
use crate::error::GuiResult;
use crate::mode::{Bound, Detached};
use knobs_dom::{ElementId, EventKind, Prop, Surface};

fn decode_text(surface: &dyn Surface, input: ElementId) -> String {
    surface.value(input)
}

/// Text field. The value is the raw text.
#[derive(Debug, Clone)]
pub struct Str<M = Detached> {
    frame: Frame,
    input: ElementId,
    mode: M,
}

impl_control_widget!(Str, Str);

impl<M> Str<M> {
    pub fn input(&self) -> ElementId {
        self.input
    }

    fn build(surface: &mut dyn Surface, label: &str, initial: &str) -> GuiResult<(Frame, ElementId)> {
        let input = surface.construct(
            "input",
            &[("type", Prop::from("text")), ("value", Prop::from(initial))],
            Vec::new(),
        )?;
        let frame = Frame::new(surface, label, &[input])?;
        Ok((frame, input))
    }
}

impl Str<Detached> {
    pub fn new(surface: &mut dyn Surface, label: &str) -> GuiResult<Self> {
        let (frame, input) = Self::build(surface, label, "")?;
        Ok(Self {
            frame,
            input,
            mode: Detached,
        })
    }
}

impl Control for Str<Detached> {
    type Value = String;

    fn value(&self, surface: &dyn Surface) -> String {
        decode_text(surface, self.input)
    }

    fn set_value(&self, surface: &mut dyn Surface, value: String) -> GuiResult<()> {
        surface.set_value(self.input, &value)?;
        surface.dispatch(self.input, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(String) + 'static,
    {
        notify_on_input(surface, self.input, decode_text, callback)
    }
}

impl Str<Bound<String>> {
    pub fn bound(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<String> + 'static,
    ) -> GuiResult<Self> {
        let mode = Bound::new(source);
        let initial = mode.source().read()?;
        let (frame, input) = Self::build(surface, label, &initial)?;
        commit_on_input(surface, input, decode_text, mode.shared())?;
        Ok(Self { frame, input, mode })
    }

    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<String> {
        let value = self.mode.source().read()?;
        surface.set_value(self.input, &value)?;
        Ok(value)
    }

    pub fn binding(&self) -> &Bound<String> {
        &self.mode
    }
}
