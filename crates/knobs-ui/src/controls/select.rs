//! Drop-down over a closed set of options.

use super::impl_control_widget;
use crate::binding::Bindable;
use crate::control::{Control, Frame, commit_on_input, notify_on_input};
use crate::error::GuiResult;
use crate::mode::{Bound, Detached};
use crate::widget::Labeled;
use knobs_dom::{Child, ElementId, EventKind, Surface};
use std::rc::Rc;

fn decode_choice(surface: &dyn Surface, input: ElementId) -> String {
    surface.value(input)
}

/// Select over fixed string options, one `<option>` each.
#[derive(Debug, Clone)]
pub struct Select<M = Detached> {
    frame: Frame,
    input: ElementId,
    options: Rc<[String]>,
    mode: M,
}

impl_control_widget!(Select, Select);

impl<M> Select<M> {
    pub fn input(&self) -> ElementId {
        self.input
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn build<I>(surface: &mut dyn Surface, label: &str, options: I) -> GuiResult<(Frame, ElementId, Rc<[String]>)>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let options: Rc<[String]> = options.into_iter().map(Into::into).collect();
        let mut children = Vec::with_capacity(options.len());
        for option in options.iter() {
            let element = surface.construct("option", &[], vec![Child::text(option.as_str())])?;
            children.push(Child::from(element));
        }
        let input = surface.construct("select", &[], children)?;
        let frame = Frame::new(surface, label, &[input])?;
        Ok((frame, input, options))
    }
}

impl Select<Detached> {
    /// Starts on the first option.
    pub fn new<I>(surface: &mut dyn Surface, label: &str, options: I) -> GuiResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let (frame, input, options) = Self::build(surface, label, options)?;
        Ok(Self {
            frame,
            input,
            options,
            mode: Detached,
        })
    }
}

impl Control for Select<Detached> {
    type Value = String;

    fn value(&self, surface: &dyn Surface) -> String {
        decode_choice(surface, self.input)
    }

    /// Values outside the option set are ignored: nothing changes and no
    /// listener runs.
    fn set_value(&self, surface: &mut dyn Surface, value: String) -> GuiResult<()> {
        if !self.options.contains(&value) {
            tracing::debug!("Select '{}' rejected unknown option '{}'", self.label(), value);
            return Ok(());
        }
        surface.set_value(self.input, &value)?;
        surface.dispatch(self.input, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(String) + 'static,
    {
        notify_on_input(surface, self.input, decode_choice, callback)
    }
}

impl Select<Bound<String>> {
    /// The source value is not checked against `options`.
    pub fn bound<I>(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<String> + 'static,
        options: I,
    ) -> GuiResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mode = Bound::new(source);
        let initial = mode.source().read()?;
        let (frame, input, options) = Self::build(surface, label, options)?;
        let select = Self {
            frame,
            input,
            options,
            mode,
        };
        select.show(surface, &initial)?;
        commit_on_input(surface, input, decode_choice, select.mode.shared())?;
        Ok(select)
    }

    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<String> {
        let value = self.mode.source().read()?;
        self.show(surface, &value)?;
        Ok(value)
    }

    /// A source value outside the options leaves nothing selected.
    fn show(&self, surface: &mut dyn Surface, value: &str) -> GuiResult<()> {
        if !self.options.iter().any(|option| option == value) {
            tracing::debug!(
                "Select '{}' bound to '{}', which is not an option",
                self.label(),
                value
            );
        }
        surface.set_value(self.input, value)?;
        Ok(())
    }

    pub fn binding(&self) -> &Bound<String> {
        &self.mode
    }
}
