//! Error types for the widget hierarchy.

use std::fmt;

use crate::object::WidgetId;

/// Invariant violations in the widget tree.
///
/// All of these are programming errors: the operation that raised them is
/// aborted and the tree is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The widget id is invalid or the widget has been removed.
    InvalidWidgetId(WidgetId),
    /// The widget already belongs to a parent.
    AlreadyParented {
        /// The widget being attached.
        child: WidgetId,
        /// Its current parent.
        parent: WidgetId,
    },
    /// The target widget cannot hold children.
    NotAView(WidgetId),
    /// The widget is not a child of the given view.
    NotAChild {
        /// The view that was searched.
        view: WidgetId,
        /// The widget that was not found among its children.
        child: WidgetId,
    },
    /// Attaching the widget would make it its own ancestor.
    CircularParentage,
    /// The widget exists but is not of the requested type.
    WrongWidgetType {
        /// The requested type name.
        expected: &'static str,
        /// The stored type name.
        got: &'static str,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidgetId(id) => {
                write!(f, "Invalid or removed widget id {}", id.as_raw())
            }
            Self::AlreadyParented { child, parent } => write!(
                f,
                "Widget {} already has a parent ({})",
                child.as_raw(),
                parent.as_raw()
            ),
            Self::NotAView(id) => write!(f, "Widget {} cannot hold children", id.as_raw()),
            Self::NotAChild { view, child } => write!(
                f,
                "Widget {} is not a child of view {}",
                child.as_raw(),
                view.as_raw()
            ),
            Self::CircularParentage => {
                write!(f, "Cannot set a widget as its own parent or ancestor")
            }
            Self::WrongWidgetType { expected, got } => {
                write!(f, "Widget type mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Result type for widget tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
