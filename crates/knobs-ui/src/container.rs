//! Folders: ordered, collapsible collections of widgets.
//!
//! A folder keeps two sequences in lock-step: its logical child list and the
//! visual children of its content region. Every mutation updates both, and
//! [`Folder::is_consistent`] checks that they still agree.

use crate::control::warn_on_err;
use crate::error::{GuiError, GuiResult};
use crate::style;
use crate::widget::{Widget, WidgetKind, WidgetRef};
use knobs_dom::{Child, ElementId, EventKind, Prop, Surface, listener};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// A collapsible section holding child widgets in a fixed order.
///
/// ```text
/// div.knobs.knobs-folder
///   span.knobs-folder-header(name)      click toggles collapse
///   div.knobs-folder-children           children, in order
/// ```
///
/// Folders start collapsed.
#[derive(Debug)]
pub struct Folder {
    name: Rc<str>,
    root: ElementId,
    header: ElementId,
    content: ElementId,
    children: Vec<WidgetRef>,
    kind: WidgetKind,
}

impl Folder {
    pub fn new(surface: &mut dyn Surface, name: &str) -> GuiResult<Self> {
        Self::with_kind(surface, name, WidgetKind::Folder)
    }

    fn with_kind(surface: &mut dyn Surface, name: &str, kind: WidgetKind) -> GuiResult<Self> {
        let content = surface.construct(
            "div",
            &[(
                "class",
                Prop::from(format!("{} {}", style::FOLDER_CHILDREN, style::HIDDEN)),
            )],
            Vec::new(),
        )?;
        let header = surface.construct(
            "span",
            &[("class", Prop::from(style::FOLDER_HEADER))],
            vec![Child::text(name)],
        )?;
        let root = surface.construct("div", &[], vec![header.into(), content.into()])?;
        surface.add_class(root, style::PANEL)?;
        surface.add_class(root, style::FOLDER)?;

        surface.add_event_listener(
            header,
            EventKind::Click,
            listener(move |surface, _| {
                let toggled = surface.toggle_class(content, style::HIDDEN, None).map(|_| ());
                warn_on_err(toggled, "Failed to toggle folder");
            }),
        )?;

        tracing::debug!("Created {} '{}' at {}", kind, name, root);
        Ok(Self {
            name: Rc::from(name),
            root,
            header,
            content,
            children: Vec::new(),
            kind,
        })
    }

    /// Append `widget`. Returns the index it landed at.
    pub fn add<W>(&mut self, surface: &mut dyn Surface, widget: &W) -> GuiResult<usize>
    where
        W: Widget + ?Sized,
    {
        self.insert(surface, widget, self.children.len())
    }

    /// Insert `widget` at `index`, clamped into `[0, len]`.
    ///
    /// Fails with [`GuiError::AlreadyAttached`] if the widget already has a
    /// parent and [`GuiError::Destroyed`] if it was removed earlier. A
    /// [`Gui`] is never a child: adding one fails with
    /// [`GuiError::NestedRoot`].
    pub fn add_at<W>(&mut self, surface: &mut dyn Surface, widget: &W, index: isize) -> GuiResult<usize>
    where
        W: Widget + ?Sized,
    {
        let len = self.children.len();
        let index = if index < 0 {
            0
        } else {
            (index as usize).min(len)
        };
        self.insert(surface, widget, index)
    }

    fn insert<W>(&mut self, surface: &mut dyn Surface, widget: &W, index: usize) -> GuiResult<usize>
    where
        W: Widget + ?Sized,
    {
        let root = widget.root();
        if widget.kind() == WidgetKind::Gui {
            return Err(GuiError::NestedRoot { root });
        }
        if !surface.contains(root) {
            return Err(GuiError::Destroyed {
                widget: widget.kind(),
                root,
            });
        }
        if let Some(parent) = surface.parent(root) {
            return Err(GuiError::AlreadyAttached {
                widget: widget.kind(),
                parent,
            });
        }

        let reference = self.children.get(index).map(|child| child.root);
        surface.insert_before(self.content, root, reference)?;
        self.children.insert(index, WidgetRef::of(widget));

        tracing::debug!(
            "Added {} {} to '{}' at index {}",
            widget.debug_name(),
            root,
            self.name,
            index
        );
        debug_assert!(self.is_consistent(surface));
        Ok(index)
    }

    /// Remove `widget` and destroy its elements, releasing every listener
    /// installed on them. Returns `false` when the widget is not a child.
    pub fn remove<W>(&mut self, surface: &mut dyn Surface, widget: &W) -> bool
    where
        W: Widget + ?Sized,
    {
        let Some(index) = self.index_of(widget) else {
            return false;
        };
        let removed = self.children.remove(index);
        if let Err(err) = surface.remove(removed.root) {
            tracing::warn!("Failed to destroy {} {}: {}", removed.kind, removed.root, err);
        }

        tracing::debug!("Removed {} {} from '{}'", removed.kind, removed.root, self.name);
        debug_assert!(self.is_consistent(surface));
        true
    }

    pub fn children(&self) -> &[WidgetRef] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn index_of<W>(&self, widget: &W) -> Option<usize>
    where
        W: Widget + ?Sized,
    {
        let root = widget.root();
        self.children.iter().position(|child| child.root == root)
    }

    pub fn contains<W>(&self, widget: &W) -> bool
    where
        W: Widget + ?Sized,
    {
        self.index_of(widget).is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> ElementId {
        self.header
    }

    /// Element the children are rendered into.
    pub fn content(&self) -> ElementId {
        self.content
    }

    pub fn open(&self, surface: &mut dyn Surface) -> GuiResult<()> {
        surface.remove_class(self.content, style::HIDDEN)?;
        Ok(())
    }

    pub fn close(&self, surface: &mut dyn Surface) -> GuiResult<()> {
        surface.add_class(self.content, style::HIDDEN)?;
        Ok(())
    }

    /// Flip the collapsed state. Returns whether the folder is now collapsed.
    pub fn toggle(&self, surface: &mut dyn Surface) -> GuiResult<bool> {
        Ok(surface.toggle_class(self.content, style::HIDDEN, None)?)
    }

    pub fn is_collapsed(&self, surface: &dyn Surface) -> bool {
        surface.has_class(self.content, style::HIDDEN)
    }

    /// Whether the logical children match the content region one to one.
    pub fn is_consistent(&self, surface: &dyn Surface) -> bool {
        let visual = surface.children(self.content);
        visual.len() == self.children.len()
            && visual
                .iter()
                .zip(&self.children)
                .all(|(element, child)| *element == child.root)
    }
}

impl Widget for Folder {
    fn root(&self) -> ElementId {
        self.root
    }

    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn debug_name(&self) -> &str {
        &self.name
    }
}

/// Root panel. A [`Folder`] with a root marker class and no other behavior.
#[derive(Debug)]
pub struct Gui(Folder);

impl Gui {
    pub fn new(surface: &mut dyn Surface, name: &str) -> GuiResult<Self> {
        let folder = Folder::with_kind(surface, name, WidgetKind::Gui)?;
        surface.add_class(folder.root, style::ROOT)?;
        Ok(Self(folder))
    }

    pub fn into_folder(self) -> Folder {
        self.0
    }
}

impl Deref for Gui {
    type Target = Folder;

    fn deref(&self) -> &Folder {
        &self.0
    }
}

impl DerefMut for Gui {
    fn deref_mut(&mut self) -> &mut Folder {
        &mut self.0
    }
}

impl Widget for Gui {
    fn root(&self) -> ElementId {
        self.0.root
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Gui
    }

    fn debug_name(&self) -> &str {
        &self.0.name
    }
}
