use crate::widget::WidgetKind;
use knobs_dom::{DomError, ElementId};

/// Errors raised by panel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// The surface rejected an operation.
    Dom(DomError),
    /// The widget already has a parent; a widget belongs to one container.
    AlreadyAttached {
        widget: WidgetKind,
        parent: ElementId,
    },
    /// The widget was removed from its container and no longer exists.
    Destroyed { widget: WidgetKind, root: ElementId },
    /// A root panel was added to a container; roots never have a parent.
    NestedRoot { root: ElementId },
    /// A bound control read a key the host object does not have.
    MissingProperty { key: String },
    /// A bound control read a key holding a value of another type.
    PropertyType {
        key: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for GuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuiError::Dom(err) => write!(f, "Surface error: {}", err),
            GuiError::AlreadyAttached { widget, parent } => write!(
                f,
                "{} widget is already attached to {}",
                widget.name(),
                parent
            ),
            GuiError::Destroyed { widget, root } => {
                write!(f, "{} widget {} was destroyed", widget.name(), root)
            }
            GuiError::NestedRoot { root } => {
                write!(f, "Root panel {} cannot be added to a folder", root)
            }
            GuiError::MissingProperty { key } => write!(f, "Property '{}' not found", key),
            GuiError::PropertyType { key, expected } => {
                write!(f, "Property '{}' is not a {}", key, expected)
            }
        }
    }
}

impl std::error::Error for GuiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuiError::Dom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomError> for GuiError {
    fn from(err: DomError) -> Self {
        GuiError::Dom(err)
    }
}

/// Result type for panel operations.
pub type GuiResult<T> = Result<T, GuiError>;
