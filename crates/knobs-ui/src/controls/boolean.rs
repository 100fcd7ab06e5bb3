//! Checkbox.

use super::impl_control_widget;
use crate::binding::Bindable;
use crate::control::{Control, Frame, commit_on_input, notify_on_input};
use crate::error::GuiResult;
use crate::mode::{Bound, Detached};
use knobs_dom::{ElementId, EventKind, Prop, Surface};

fn decode_checked(surface: &dyn Surface, input: ElementId) -> bool {
    surface.checked(input)
}

#[derive(Debug, Clone)]
pub struct Bool<M = Detached> {
    frame: Frame,
    input: ElementId,
    mode: M,
}

impl_control_widget!(Bool, Bool);

impl<M> Bool<M> {
    pub fn input(&self) -> ElementId {
        self.input
    }

    fn build(surface: &mut dyn Surface, label: &str, checked: bool) -> GuiResult<(Frame, ElementId)> {
        let input = surface.construct(
            "input",
            &[("type", Prop::from("checkbox")), ("checked", Prop::from(checked))],
            Vec::new(),
        )?;
        let frame = Frame::new(surface, label, &[input])?;
        Ok((frame, input))
    }
}

impl Bool<Detached> {
    /// Starts unchecked.
    pub fn new(surface: &mut dyn Surface, label: &str) -> GuiResult<Self> {
        let (frame, input) = Self::build(surface, label, false)?;
        Ok(Self {
            frame,
            input,
            mode: Detached,
        })
    }
}

impl Control for Bool<Detached> {
    type Value = bool;

    fn value(&self, surface: &dyn Surface) -> bool {
        decode_checked(surface, self.input)
    }

    fn set_value(&self, surface: &mut dyn Surface, value: bool) -> GuiResult<()> {
        surface.set_checked(self.input, value)?;
        surface.dispatch(self.input, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(bool) + 'static,
    {
        notify_on_input(surface, self.input, decode_checked, callback)
    }
}

impl Bool<Bound<bool>> {
    pub fn bound(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<bool> + 'static,
    ) -> GuiResult<Self> {
        let mode = Bound::new(source);
        let initial = mode.source().read()?;
        let (frame, input) = Self::build(surface, label, initial)?;
        commit_on_input(surface, input, decode_checked, mode.shared())?;
        Ok(Self { frame, input, mode })
    }

    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<bool> {
        let value = self.mode.source().read()?;
        surface.set_checked(self.input, value)?;
        Ok(value)
    }

    pub fn binding(&self) -> &Bound<bool> {
        &self.mode
    }
}
