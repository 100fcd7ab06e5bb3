//! Widget capability traits.
//!
//! Every node of a panel owns exactly one root element on the surface. The
//! root's [`ElementId`] is the widget's identity: containers store a
//! [`WidgetRef`] per child and compare roots when removing.

use knobs_dom::ElementId;
use std::fmt;

/// Closed set of widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Gui,
    Folder,
    Num,
    Range,
    Str,
    Select,
    Bool,
    Color,
    ColorAlpha,
    Button,
}

impl WidgetKind {
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Gui => "Gui",
            WidgetKind::Folder => "Folder",
            WidgetKind::Num => "Num",
            WidgetKind::Range => "Range",
            WidgetKind::Str => "Str",
            WidgetKind::Select => "Select",
            WidgetKind::Bool => "Bool",
            WidgetKind::Color => "Color",
            WidgetKind::ColorAlpha => "ColorAlpha",
            WidgetKind::Button => "Button",
        }
    }

    /// Whether the variant holds other widgets.
    pub fn is_container(self) -> bool {
        matches!(self, WidgetKind::Gui | WidgetKind::Folder)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base trait for all widgets.
pub trait Widget {
    /// The element inserted into a container's content region.
    fn root(&self) -> ElementId;

    fn kind(&self) -> WidgetKind;

    /// Get the widget's name for debugging.
    fn debug_name(&self) -> &str {
        self.kind().name()
    }
}

/// Capability: widget that shows a label next to its inputs.
pub trait Labeled: Widget {
    fn label(&self) -> &str;
}

/// Copyable record of a widget, as stored by containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetRef {
    pub root: ElementId,
    pub kind: WidgetKind,
}

impl WidgetRef {
    pub fn of<W: Widget + ?Sized>(widget: &W) -> Self {
        Self {
            root: widget.root(),
            kind: widget.kind(),
        }
    }
}

impl Widget for WidgetRef {
    fn root(&self) -> ElementId {
        self.root
    }

    fn kind(&self) -> WidgetKind {
        self.kind
    }
}
