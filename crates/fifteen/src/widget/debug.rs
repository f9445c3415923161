//! Human-readable dumps of the widget hierarchy.
//!
//! ```
//! use fifteen::render::Rect;
//! use fifteen::widget::{TreeFormatOptions, View, WidgetTree, WidgetTreeDebug};
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert(Rect::new(0.0, 0.0, 400.0, 400.0), View::new());
//! tree.insert_child(root, Rect::new(0.0, 0.0, 200.0, 200.0), View::new()).unwrap();
//!
//! let dump = WidgetTreeDebug::with_options(TreeFormatOptions::minimal())
//!     .format_subtree(&tree, root)
//!     .unwrap();
//! assert_eq!(dump, "View\n`-- View\n");
//! ```

use std::fmt::Write as _;

use fifteen_core::WidgetId;

use super::tree::WidgetTree;

/// Branch drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// `|--` and `` `-- `` connectors.
    #[default]
    Ascii,
    /// Box-drawing connectors.
    Unicode,
}

/// What each line of a dump shows.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// Connector style.
    pub style: TreeStyle,
    /// Show raw widget ids.
    pub show_ids: bool,
    /// Show each widget's rectangle.
    pub show_rects: bool,
    /// Maximum depth to descend (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_rects: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Type names and descriptions only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_rects: false,
            ..Default::default()
        }
    }
}

/// Formats a widget subtree, one widget per line.
#[derive(Debug, Clone, Default)]
pub struct WidgetTreeDebug {
    options: TreeFormatOptions,
}

impl WidgetTreeDebug {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format `root` and everything below it.
    pub fn format_subtree(&self, tree: &WidgetTree, root: WidgetId) -> fifteen_core::Result<String> {
        let mut output = String::new();
        self.format_node(tree, root, 0, "", None, &mut output)?;
        Ok(output)
    }

    /// Log the subtree at debug level.
    pub fn log_subtree(&self, tree: &WidgetTree, root: WidgetId) {
        match self.format_subtree(tree, root) {
            Ok(dump) => tracing::debug!(
                target: fifteen_core::logging::targets::WIDGET,
                "widget tree:\n{dump}"
            ),
            Err(err) => tracing::debug!(
                target: fifteen_core::logging::targets::WIDGET,
                "cannot dump widget tree: {err}"
            ),
        }
    }

    /// `is_last` is `None` for the subtree root, which gets no connector.
    fn format_node(
        &self,
        tree: &WidgetTree,
        id: WidgetId,
        depth: usize,
        indent: &str,
        is_last: Option<bool>,
        output: &mut String,
    ) -> fifteen_core::Result<()> {
        let (tee, corner, pipe, blank) = match self.options.style {
            TreeStyle::Ascii => ("|-- ", "`-- ", "|   ", "    "),
            TreeStyle::Unicode => (
                "\u{251c}\u{2500}\u{2500} ",
                "\u{2514}\u{2500}\u{2500} ",
                "\u{2502}   ",
                "    ",
            ),
        };

        output.push_str(indent);
        let child_indent = match is_last {
            None => String::new(),
            Some(true) => {
                output.push_str(corner);
                format!("{indent}{blank}")
            }
            Some(false) => {
                output.push_str(tee);
                format!("{indent}{pipe}")
            }
        };

        let type_name = tree.type_name(id)?;
        output.push_str(type_name.rsplit("::").next().unwrap_or(type_name));
        if let Some(description) = tree.describe(id)? {
            let _ = write!(output, " \"{description}\"");
        }
        if self.options.show_ids {
            let _ = write!(output, " [{}]", id.as_raw());
        }
        if self.options.show_rects {
            let rect = tree.rect(id)?;
            let _ = write!(
                output,
                " ({}, {}, {}x{})",
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height()
            );
        }
        output.push('\n');

        if self.options.max_depth.is_some_and(|max| depth >= max) {
            return Ok(());
        }

        let children = tree.children(id)?;
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            self.format_node(tree, child, depth + 1, &child_indent, Some(last), output)?;
        }
        Ok(())
    }
}
