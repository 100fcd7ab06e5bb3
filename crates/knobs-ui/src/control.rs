//! The leaf widget contract shared by every control variant.

use crate::binding::Bindable;
use crate::error::GuiResult;
use crate::style;
use crate::widget::Labeled;
use knobs_dom::{Child, DomResult, ElementId, EventKind, Prop, Surface, listener};
use std::cell::RefCell;
use std::rc::Rc;

/// Label and inputs regions every control renders into.
///
/// ```text
/// div.knobs-control
///   div.knobs-label > span(label)
///   div.knobs-inputs > inputs...
/// ```
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub root: ElementId,
    pub label: Rc<str>,
}

impl Frame {
    pub fn new(surface: &mut dyn Surface, label: &str, inputs: &[ElementId]) -> GuiResult<Self> {
        let caption = surface.construct("span", &[], vec![Child::text(label)])?;
        let label_region = surface.construct(
            "div",
            &[("class", Prop::from(style::LABEL))],
            vec![caption.into()],
        )?;
        let inputs_region = surface.construct(
            "div",
            &[("class", Prop::from(style::INPUTS))],
            inputs.iter().copied().map(Child::from).collect(),
        )?;
        let root = surface.construct(
            "div",
            &[],
            vec![label_region.into(), inputs_region.into()],
        )?;
        surface.add_class(root, style::CONTROL)?;

        Ok(Self {
            root,
            label: Rc::from(label),
        })
    }
}

/// Detached-mode API of a control: the control owns its value.
///
/// Only `Variant<Detached>` implements this trait. A bound control has no
/// independent value, so asking one for `value` or `set_value` does not
/// compile.
pub trait Control: Labeled {
    /// Logical value, independent of how many inputs encode it.
    type Value: Clone + 'static;

    fn value(&self, surface: &dyn Surface) -> Self::Value;

    /// Render `value` and notify listeners exactly as a user edit would,
    /// synchronously and in registration order.
    fn set_value(&self, surface: &mut dyn Surface, value: Self::Value) -> GuiResult<()>;

    /// Call `listener` with the new value after every change.
    fn add_listener<F>(&self, surface: &mut dyn Surface, listener: F) -> GuiResult<()>
    where
        F: FnMut(Self::Value) + 'static;

    /// Seed the control from `source`, then write every later change back.
    fn bind<B>(&self, surface: &mut dyn Surface, source: B) -> GuiResult<()>
    where
        B: Bindable<Self::Value> + 'static,
    {
        self.set_value(surface, source.read()?)?;
        self.add_listener(surface, move |value| source.commit(value))
    }
}

/// One user callback reachable from several inputs.
pub(crate) struct SharedCallback<T>(Rc<RefCell<dyn FnMut(T)>>);

impl<T: 'static> SharedCallback<T> {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self(Rc::new(RefCell::new(callback)))
    }

    pub fn call(&self, value: T) {
        match self.0.try_borrow_mut() {
            Ok(mut callback) => (&mut *callback)(value),
            Err(_) => tracing::warn!("Skipping re-entrant control listener"),
        }
    }
}

impl<T> Clone for SharedCallback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Decoder from an input element to a logical value.
pub(crate) type Decode<T> = fn(&dyn Surface, ElementId) -> T;

/// Call `callback` with the decoded value on every `input` event of `input`.
pub(crate) fn notify_on_input<T, F>(
    surface: &mut dyn Surface,
    input: ElementId,
    decode: Decode<T>,
    mut callback: F,
) -> GuiResult<()>
where
    T: 'static,
    F: FnMut(T) + 'static,
{
    surface.add_event_listener(
        input,
        EventKind::Input,
        listener(move |surface, event| callback(decode(&*surface, event.target))),
    )?;
    Ok(())
}

/// Commit the decoded value to `source` on every `input` event of `input`.
pub(crate) fn commit_on_input<T: 'static>(
    surface: &mut dyn Surface,
    input: ElementId,
    decode: Decode<T>,
    source: Rc<dyn Bindable<T>>,
) -> GuiResult<()> {
    notify_on_input(surface, input, decode, move |value| source.commit(value))
}

/// Surface failures inside event handlers cannot propagate; log them.
pub(crate) fn warn_on_err(result: DomResult<()>, context: &str) {
    if let Err(err) = result {
        tracing::warn!("{}: {}", context, err);
    }
}
