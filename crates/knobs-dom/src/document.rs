//! In-memory element tree implementing [`Surface`].

use crate::element::{Child, ElementId, Prop};
use crate::error::{DomError, DomResult};
use crate::event::{Event, EventKind, Listener, ListenerId};
use crate::native;
use crate::surface::Surface;
use indexmap::{IndexMap, IndexSet};
use knobs_core::alloc::RandomState;
use std::fmt;
use std::rc::Rc;

enum NodeData {
    Element { tag: String },
    Text(String),
}

struct Registration {
    id: ListenerId,
    kind: EventKind,
    callback: Listener,
}

/// A node in the document.
struct Node {
    data: NodeData,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: IndexMap<String, String>,
    properties: IndexMap<String, Prop>,
    classes: IndexSet<String>,
    listeners: Vec<Registration>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            attributes: IndexMap::new(),
            properties: IndexMap::new(),
            classes: IndexSet::new(),
            listeners: Vec::new(),
        }
    }

    fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { tag } => Some(tag),
            NodeData::Text(_) => None,
        }
    }
}

/// Element tree that behaves like a browser document for the native inputs
/// used by the panel.
///
/// Besides the [`Surface`] operations it can simulate user interaction
/// ([`Document::user_input`], [`Document::user_toggle`],
/// [`Document::user_click`]) and render a subtree as markup for debugging.
pub struct Document {
    nodes: IndexMap<ElementId, Node, RandomState>,
    next_id: usize,
    next_listener: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::default(),
            next_id: 0,
            next_listener: 0,
        }
    }

    /// Number of live nodes, text nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of listeners installed on a node.
    pub fn listener_count(&self, node: ElementId) -> usize {
        self.nodes.get(&node).map_or(0, |n| n.listeners.len())
    }

    /// Simulate the user typing `text` into an input: the value is assigned
    /// (and sanitized like a browser would) and `input` is dispatched.
    pub fn user_input(&mut self, node: ElementId, text: &str) -> DomResult<()> {
        self.set_value(node, text)?;
        self.dispatch(node, EventKind::Input)
    }

    /// Simulate the user clicking a checkbox.
    pub fn user_toggle(&mut self, node: ElementId) -> DomResult<()> {
        let checked = !self.checked(node);
        self.set_checked(node, checked)?;
        self.dispatch(node, EventKind::Input)?;
        self.dispatch(node, EventKind::Change)
    }

    /// Simulate a click.
    pub fn user_click(&mut self, node: ElementId) -> DomResult<()> {
        self.dispatch(node, EventKind::Click)
    }

    /// Render a subtree as markup. Unknown ids render as an empty string.
    pub fn outer_html(&self, node: ElementId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, id: ElementId, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let tag = match &node.data {
            NodeData::Text(text) => {
                out.push_str(&escape(text));
                return;
            }
            NodeData::Element { tag } => tag,
        };

        out.push('<');
        out.push_str(tag);
        for (name, value) in &node.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        if !node.classes.is_empty() {
            let classes: Vec<&str> = node.classes.iter().map(String::as_str).collect();
            out.push_str(&format!(" class=\"{}\"", escape(&classes.join(" "))));
        }
        for (name, value) in &node.properties {
            match value {
                Prop::Bool(true) => out.push_str(&format!(" {}", name)),
                Prop::Bool(false) => {}
                other => out.push_str(&format!(" {}=\"{}\"", name, escape(&other.to_text()))),
            }
        }
        out.push('>');

        if native::is_void(tag) {
            return;
        }
        for child in &node.children {
            self.write_html(*child, out);
        }
        out.push_str(&format!("</{}>", tag));
    }

    fn create_node(&mut self, data: NodeData) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(data));
        id
    }

    fn element_mut(&mut self, id: ElementId) -> DomResult<&mut Node> {
        let node = self.nodes.get_mut(&id).ok_or(DomError::NotFound(id))?;
        if node.tag().is_none() {
            return Err(DomError::NotAnElement(id));
        }
        Ok(node)
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.nodes.get_mut(&id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|child| *child != id);
        }
    }

    fn option_value(&self, option: ElementId) -> String {
        match self.nodes.get(&option).and_then(|n| n.properties.get("value")) {
            Some(value) => value.to_text(),
            None => self.text_content(option),
        }
    }

    fn option_values(&self, select: ElementId) -> Vec<String> {
        self.children(select)
            .iter()
            .filter(|child| self.tag(**child) == Some("option"))
            .map(|child| self.option_value(*child))
            .collect()
    }

    fn select_value(&self, select: ElementId, node: &Node) -> String {
        match node.properties.get("value") {
            Some(value) => value.to_text(),
            None => self.option_values(select).into_iter().next().unwrap_or_default(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Surface for Document {
    fn construct(
        &mut self,
        tag: &str,
        props: &[(&str, Prop)],
        children: Vec<Child>,
    ) -> DomResult<ElementId> {
        for child in &children {
            if let Child::Element(id) = child {
                if !self.nodes.contains_key(id) {
                    return Err(DomError::NotFound(*id));
                }
            }
        }

        let tag = tag.to_ascii_lowercase();
        let id = self.create_node(NodeData::Element { tag: tag.clone() });
        for (name, value) in props {
            if native::is_native_property(&tag, name) {
                self.set_property(id, name, value.clone())?;
            } else {
                self.set_attribute(id, name, &value.to_text())?;
            }
        }
        for child in children {
            let child_id = match child {
                Child::Text(text) => self.create_node(NodeData::Text(text)),
                Child::Element(element) => element,
            };
            self.insert_before(id, child_id, None)?;
        }

        tracing::trace!("Constructed <{}> {}", tag, id);
        Ok(id)
    }

    fn contains(&self, node: ElementId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn tag(&self, node: ElementId) -> Option<&str> {
        self.nodes.get(&node).and_then(Node::tag)
    }

    fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn children(&self, node: ElementId) -> &[ElementId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn insert_before(
        &mut self,
        parent: ElementId,
        child: ElementId,
        reference: Option<ElementId>,
    ) -> DomResult<()> {
        let parent_node = self.nodes.get(&parent).ok_or(DomError::NotFound(parent))?;
        if parent_node.tag().is_none() {
            return Err(DomError::NotAnElement(parent));
        }
        if !self.nodes.contains_key(&child) {
            return Err(DomError::NotFound(child));
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild {
                    parent,
                    child: reference,
                });
            }
            if reference == child {
                return Ok(());
            }
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        let parent_node = self.nodes.get_mut(&parent).ok_or(DomError::NotFound(parent))?;
        let index = reference
            .and_then(|r| parent_node.children.iter().position(|c| *c == r))
            .unwrap_or(parent_node.children.len());
        parent_node.children.insert(index, child);
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }
        Ok(())
    }

    fn remove(&mut self, node: ElementId) -> DomResult<()> {
        if !self.nodes.contains_key(&node) {
            return Err(DomError::NotFound(node));
        }
        self.detach(node);

        let mut stack = vec![node];
        let mut destroyed = 0usize;
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.shift_remove(&id) {
                stack.extend(removed.children);
                destroyed += 1;
            }
        }

        tracing::trace!("Removed {} ({} nodes destroyed)", node, destroyed);
        Ok(())
    }

    fn attribute(&self, node: ElementId, name: &str) -> Option<String> {
        let node = self.nodes.get(&node)?;
        if name == "class" {
            if node.classes.is_empty() {
                return None;
            }
            let classes: Vec<&str> = node.classes.iter().map(String::as_str).collect();
            return Some(classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: ElementId, name: &str, value: &str) -> DomResult<()> {
        let element = self.element_mut(node)?;
        if name == "class" {
            element.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            element.attributes.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    fn property(&self, node: ElementId, name: &str) -> Option<Prop> {
        let element = self.nodes.get(&node)?;
        if element.tag() == Some("select") && name == "value" {
            return Some(Prop::Text(self.select_value(node, element)));
        }
        element.properties.get(name).cloned()
    }

    fn set_property(&mut self, node: ElementId, name: &str, value: Prop) -> DomResult<()> {
        let value = native::normalize(name, value);
        let tag = self
            .nodes
            .get(&node)
            .ok_or(DomError::NotFound(node))?
            .tag()
            .ok_or(DomError::NotAnElement(node))?
            .to_string();

        match tag.as_str() {
            "select" if name == "value" => {
                let requested = value.to_text();
                let known = self.option_values(node).contains(&requested);
                let stored = if known { requested } else { String::new() };
                self.element_mut(node)?
                    .properties
                    .insert(name.to_string(), Prop::Text(stored));
            }
            "input" => {
                let element = self.element_mut(node)?;
                element.properties.insert(name.to_string(), value);
                if native::affects_input_value(name) {
                    native::sanitize_input(&mut element.properties);
                }
            }
            _ => {
                self.element_mut(node)?
                    .properties
                    .insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    fn toggle_class(
        &mut self,
        node: ElementId,
        class: &str,
        force: Option<bool>,
    ) -> DomResult<bool> {
        let element = self.element_mut(node)?;
        let present = element.classes.contains(class);
        let wanted = force.unwrap_or(!present);
        if wanted {
            element.classes.insert(class.to_string());
        } else {
            element.classes.shift_remove(class);
        }
        Ok(wanted)
    }

    fn has_class(&self, node: ElementId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.contains(class))
    }

    fn text_content(&self, node: ElementId) -> String {
        let mut out = String::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let Some(current) = self.nodes.get(&id) else {
                continue;
            };
            match &current.data {
                NodeData::Text(text) => out.push_str(text),
                NodeData::Element { .. } => stack.extend(current.children.iter().rev()),
            }
        }
        out
    }

    fn add_event_listener(
        &mut self,
        node: ElementId,
        kind: EventKind,
        listener: Listener,
    ) -> DomResult<ListenerId> {
        let id = ListenerId(self.next_listener);
        let target = self.nodes.get_mut(&node).ok_or(DomError::NotFound(node))?;
        target.listeners.push(Registration {
            id,
            kind,
            callback: listener,
        });
        self.next_listener += 1;
        Ok(id)
    }

    fn remove_event_listener(&mut self, node: ElementId, id: ListenerId) -> bool {
        let Some(target) = self.nodes.get_mut(&node) else {
            return false;
        };
        let before = target.listeners.len();
        target.listeners.retain(|registration| registration.id != id);
        target.listeners.len() != before
    }

    fn dispatch(&mut self, node: ElementId, kind: EventKind) -> DomResult<()> {
        let target = self.nodes.get(&node).ok_or(DomError::NotFound(node))?;
        let pending: Vec<(ListenerId, Listener)> = target
            .listeners
            .iter()
            .filter(|registration| registration.kind == kind)
            .map(|registration| (registration.id, Rc::clone(&registration.callback)))
            .collect();

        tracing::trace!("Dispatching {} on {} to {} listeners", kind.name(), node, pending.len());

        let event = Event { kind, target: node };
        for (id, callback) in pending {
            let registered = self
                .nodes
                .get(&node)
                .is_some_and(|n| n.listeners.iter().any(|r| r.id == id));
            if !registered {
                continue;
            }
            let Ok(mut handler) = callback.try_borrow_mut() else {
                tracing::warn!(
                    "Skipping re-entrant {} listener {:?} on {}",
                    kind.name(),
                    id,
                    node
                );
                continue;
            };
            (&mut *handler)(&mut *self, &event);
        }
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
