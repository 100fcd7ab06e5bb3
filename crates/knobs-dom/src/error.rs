use crate::element::ElementId;

/// Errors raised by surface operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// The node does not exist (never created, or already removed).
    NotFound(ElementId),
    /// The operation needs an element but the node is a text node.
    NotAnElement(ElementId),
    /// The reference node is not a child of the given parent.
    NotAChild { parent: ElementId, child: ElementId },
    /// Inserting the child would make a node its own ancestor.
    HierarchyRequest { parent: ElementId, child: ElementId },
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::NotFound(id) => write!(f, "Node {} not found", id),
            DomError::NotAnElement(id) => write!(f, "Node {} is not an element", id),
            DomError::NotAChild { parent, child } => {
                write!(f, "Node {} is not a child of {}", child, parent)
            }
            DomError::HierarchyRequest { parent, child } => write!(
                f,
                "Cannot insert {} into {}: the new child is an ancestor of the parent",
                child, parent
            ),
        }
    }
}

impl std::error::Error for DomError {}

/// Result type for surface operations.
pub type DomResult<T> = Result<T, DomError>;
