//! The visual surface capability.

use crate::element::{Child, ElementId, Prop};
use crate::error::DomResult;
use crate::event::{EventKind, Listener, ListenerId};

/// Everything a widget needs from the host's element tree.
///
/// The trait is object-safe; widgets take `&mut dyn Surface` so that event
/// handlers, which receive the surface as a trait object, can call straight
/// back into widget code.
pub trait Surface {
    /// Create an element. Each prop is applied as a native property when the
    /// tag exposes a writable property of that name, otherwise as an
    /// attribute. Text children become text nodes, element children are
    /// appended in order.
    fn construct(&mut self, tag: &str, props: &[(&str, Prop)], children: Vec<Child>)
        -> DomResult<ElementId>;

    /// Whether the node exists (created and not removed).
    fn contains(&self, node: ElementId) -> bool;

    /// Tag name of an element, `None` for text nodes and unknown ids.
    fn tag(&self, node: ElementId) -> Option<&str>;

    fn parent(&self, node: ElementId) -> Option<ElementId>;

    /// Child nodes in visual order. Empty for unknown ids.
    fn children(&self, node: ElementId) -> &[ElementId];

    /// Insert `child` into `parent` before `reference`, or at the end when
    /// `reference` is `None`. A child that already has a parent is moved.
    fn insert_before(
        &mut self,
        parent: ElementId,
        child: ElementId,
        reference: Option<ElementId>,
    ) -> DomResult<()>;

    /// Detach `node` and destroy it with its whole subtree, dropping every
    /// listener installed on it.
    fn remove(&mut self, node: ElementId) -> DomResult<()>;

    fn attribute(&self, node: ElementId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: ElementId, name: &str, value: &str) -> DomResult<()>;

    fn property(&self, node: ElementId, name: &str) -> Option<Prop>;

    /// Assign a native property. Never dispatches an event.
    fn set_property(&mut self, node: ElementId, name: &str, value: Prop) -> DomResult<()>;

    /// Toggle a class; `force` pins the outcome. Returns whether the class is
    /// now present.
    fn toggle_class(&mut self, node: ElementId, class: &str, force: Option<bool>)
        -> DomResult<bool>;

    fn has_class(&self, node: ElementId, class: &str) -> bool;

    /// Concatenated text of every descendant text node.
    fn text_content(&self, node: ElementId) -> String;

    fn add_event_listener(
        &mut self,
        node: ElementId,
        kind: EventKind,
        listener: Listener,
    ) -> DomResult<ListenerId>;

    /// Returns whether the listener was registered on `node`.
    fn remove_event_listener(&mut self, node: ElementId, id: ListenerId) -> bool;

    /// Synchronously invoke the listeners of `kind` on `node`, in
    /// registration order.
    fn dispatch(&mut self, node: ElementId, kind: EventKind) -> DomResult<()>;

    fn append(&mut self, parent: ElementId, child: ElementId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    fn add_class(&mut self, node: ElementId, class: &str) -> DomResult<()> {
        self.toggle_class(node, class, Some(true)).map(|_| ())
    }

    fn remove_class(&mut self, node: ElementId, class: &str) -> DomResult<()> {
        self.toggle_class(node, class, Some(false)).map(|_| ())
    }

    /// The `value` property as text (empty when unset).
    fn value(&self, node: ElementId) -> String {
        self.property(node, "value")
            .map(|prop| prop.to_text())
            .unwrap_or_default()
    }

    fn set_value(&mut self, node: ElementId, value: &str) -> DomResult<()> {
        self.set_property(node, "value", Prop::from(value))
    }

    fn checked(&self, node: ElementId) -> bool {
        self.property(node, "checked")
            .map(|prop| prop.as_bool())
            .unwrap_or(false)
    }

    fn set_checked(&mut self, node: ElementId, checked: bool) -> DomResult<()> {
        self.set_property(node, "checked", Prop::Bool(checked))
    }
}
