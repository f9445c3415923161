//! Widget identity.
//!
//! Widgets live in an arena owned by the widget tree. Everything else,
//! including parent links and callbacks bound to a specific widget, refers
//! to them through a [`WidgetId`]. Ids never own the widget they name.

use slotmap::new_key_type;
use static_assertions::assert_impl_all;

new_key_type! {
    /// A unique identifier for a widget in the tree arena.
    ///
    /// `WidgetId`s are stable handles that remain valid while the widget
    /// lives, including across reorderings of its parent's children. They
    /// become invalid once the widget is removed from its parent.
    pub struct WidgetId;
}

assert_impl_all!(WidgetId: Copy, Send, Sync, std::hash::Hash, Ord);

impl WidgetId {
    /// Convert the WidgetId to a raw u64 value.
    ///
    /// Useful for logging and for debug dumps where a short numeric id
    /// reads better than the slotmap key.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a WidgetId from a raw u64 value.
    ///
    /// This does not check that a widget with this id exists.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}
