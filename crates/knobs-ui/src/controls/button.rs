//! Clickable button. Not a control: it has no label and no value.

use crate::error::GuiResult;
use crate::style;
use crate::widget::{Widget, WidgetKind};
use knobs_dom::{Child, ElementId, EventKind, Prop, Surface, listener};
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Button {
    root: ElementId,
    text: Rc<str>,
}

impl Button {
    pub fn new(surface: &mut dyn Surface, text: &str) -> GuiResult<Self> {
        let root = surface.construct(
            "button",
            &[("class", Prop::from(style::BUTTON))],
            vec![Child::text(text)],
        )?;
        Ok(Self {
            root,
            text: Rc::from(text),
        })
    }

    /// Button that runs `callback` on every click.
    pub fn with_callback<F>(surface: &mut dyn Surface, text: &str, callback: F) -> GuiResult<Self>
    where
        F: FnMut() + 'static,
    {
        let button = Self::new(surface, text)?;
        button.add_listener(surface, callback)?;
        Ok(button)
    }

    /// Run `callback` on every click, after the callbacks added before it.
    pub fn add_listener<F>(&self, surface: &mut dyn Surface, mut callback: F) -> GuiResult<()>
    where
        F: FnMut() + 'static,
    {
        surface.add_event_listener(self.root, EventKind::Click, listener(move |_, _| callback()))?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Button {
    fn root(&self) -> ElementId {
        self.root
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }
}
