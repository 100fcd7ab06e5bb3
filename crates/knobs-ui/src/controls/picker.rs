//! Color pickers.

use super::impl_control_widget;
use crate::binding::Bindable;
use crate::color::{alpha_to_byte, byte_to_alpha, decode_hex, encode_hex, pack_rgba, unpack_rgba};
use crate::control::{Control, Frame, SharedCallback, commit_on_input, notify_on_input, warn_on_err};
use crate::error::GuiResult;
use crate::mode::{Bound, Detached};
use crate::numeric::{decode_number, render_number};
use knobs_dom::{DomResult, ElementId, EventKind, Prop, Surface, listener};

fn decode_rgb(surface: &dyn Surface, input: ElementId) -> u32 {
    decode_hex(&surface.value(input))
}

fn color_input(surface: &mut dyn Surface, rgb: u32) -> GuiResult<ElementId> {
    let input = surface.construct(
        "input",
        &[("type", Prop::from("color")), ("value", Prop::from(encode_hex(rgb)))],
        Vec::new(),
    )?;
    Ok(input)
}

/// 24-bit color shown as `#rrggbb`.
#[derive(Debug, Clone)]
pub struct Color<M = Detached> {
    frame: Frame,
    input: ElementId,
    mode: M,
}

impl_control_widget!(Color, Color);

impl<M> Color<M> {
    pub fn input(&self) -> ElementId {
        self.input
    }
}

impl Color<Detached> {
    /// Starts black.
    pub fn new(surface: &mut dyn Surface, label: &str) -> GuiResult<Self> {
        let input = color_input(surface, 0)?;
        let frame = Frame::new(surface, label, &[input])?;
        Ok(Self {
            frame,
            input,
            mode: Detached,
        })
    }
}

impl Control for Color<Detached> {
    type Value = u32;

    fn value(&self, surface: &dyn Surface) -> u32 {
        decode_rgb(surface, self.input)
    }

    /// Bits above the low 24 are ignored.
    fn set_value(&self, surface: &mut dyn Surface, value: u32) -> GuiResult<()> {
        surface.set_value(self.input, &encode_hex(value))?;
        surface.dispatch(self.input, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(u32) + 'static,
    {
        notify_on_input(surface, self.input, decode_rgb, callback)
    }
}

impl Color<Bound<u32>> {
    pub fn bound(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<u32> + 'static,
    ) -> GuiResult<Self> {
        let mode = Bound::new(source);
        let input = color_input(surface, mode.source().read()?)?;
        let frame = Frame::new(surface, label, &[input])?;
        commit_on_input(surface, input, decode_rgb, mode.shared())?;
        Ok(Self { frame, input, mode })
    }

    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<u32> {
        let value = self.mode.source().read()?;
        surface.set_value(self.input, &encode_hex(value))?;
        Ok(value)
    }

    pub fn binding(&self) -> &Bound<u32> {
        &self.mode
    }
}

/// Color plus opacity packed as `(rgb << 8) | alpha`.
///
/// The opacity is edited on a `[0, 1]` slider and stored as a byte. Both
/// inputs encode one value and are always rendered together.
#[derive(Debug, Clone)]
pub struct ColorAlpha<M = Detached> {
    frame: Frame,
    color: ElementId,
    alpha: ElementId,
    mode: M,
}

impl_control_widget!(ColorAlpha, ColorAlpha);

fn decode_rgba(surface: &dyn Surface, color: ElementId, alpha: ElementId) -> u32 {
    pack_rgba(
        decode_rgb(surface, color),
        alpha_to_byte(decode_number(surface, alpha)),
    )
}

fn render_rgba(surface: &mut dyn Surface, color: ElementId, alpha: ElementId, value: u32) -> DomResult<()> {
    let (rgb, byte) = unpack_rgba(value);
    surface.set_value(color, &encode_hex(rgb))?;
    render_number(surface, alpha, byte_to_alpha(byte))
}

impl<M> ColorAlpha<M> {
    pub fn color_input(&self) -> ElementId {
        self.color
    }

    pub fn alpha_input(&self) -> ElementId {
        self.alpha
    }

    fn build(surface: &mut dyn Surface, label: &str, value: u32) -> GuiResult<(Frame, ElementId, ElementId)> {
        let (rgb, byte) = unpack_rgba(value);
        let color = color_input(surface, rgb)?;
        let alpha = surface.construct(
            "input",
            &[
                ("type", Prop::from("range")),
                ("min", Prop::from(0.0)),
                ("max", Prop::from(1.0)),
                ("step", Prop::from(0.001)),
                ("value", Prop::from(byte_to_alpha(byte))),
            ],
            Vec::new(),
        )?;
        let frame = Frame::new(surface, label, &[color, alpha])?;
        Ok((frame, color, alpha))
    }
}

impl ColorAlpha<Detached> {
    /// Starts opaque black, `0x000000FF`.
    pub fn new(surface: &mut dyn Surface, label: &str) -> GuiResult<Self> {
        let (frame, color, alpha) = Self::build(surface, label, 0xFF)?;
        Ok(Self {
            frame,
            color,
            alpha,
            mode: Detached,
        })
    }
}

impl Control for ColorAlpha<Detached> {
    type Value = u32;

    fn value(&self, surface: &dyn Surface) -> u32 {
        decode_rgba(surface, self.color, self.alpha)
    }

    fn set_value(&self, surface: &mut dyn Surface, value: u32) -> GuiResult<()> {
        render_rgba(surface, self.color, self.alpha, value)?;
        surface.dispatch(self.color, EventKind::Input)?;
        Ok(())
    }

    fn add_listener<F>(&self, surface: &mut dyn Surface, callback: F) -> GuiResult<()>
    where
        F: FnMut(u32) + 'static,
    {
        let callback = SharedCallback::new(callback);
        let (color, alpha) = (self.color, self.alpha);
        for input in [color, alpha] {
            let callback = callback.clone();
            surface.add_event_listener(
                input,
                EventKind::Input,
                listener(move |surface, _| callback.call(decode_rgba(&*surface, color, alpha))),
            )?;
        }
        Ok(())
    }
}

impl ColorAlpha<Bound<u32>> {
    pub fn bound(
        surface: &mut dyn Surface,
        label: &str,
        source: impl Bindable<u32> + 'static,
    ) -> GuiResult<Self> {
        let mode = Bound::new(source);
        let (frame, color, alpha) = Self::build(surface, label, mode.source().read()?)?;

        for input in [color, alpha] {
            let source = mode.shared();
            surface.add_event_listener(
                input,
                EventKind::Input,
                listener(move |surface, _| {
                    let value = decode_rgba(&*surface, color, alpha);
                    warn_on_err(
                        render_rgba(surface, color, alpha, value),
                        "Failed to render color",
                    );
                    source.commit(value);
                }),
            )?;
        }

        Ok(Self {
            frame,
            color,
            alpha,
            mode,
        })
    }

    pub fn refresh(&self, surface: &mut dyn Surface) -> GuiResult<u32> {
        let value = self.mode.source().read()?;
        render_rgba(surface, self.color, self.alpha, value)?;
        Ok(value)
    }

    pub fn binding(&self) -> &Bound<u32> {
        &self.mode
    }
}
