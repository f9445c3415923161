//! Ordered callback tables.
//!
//! [`Slots`] maps an event key to the list of callbacks connected to it.
//! Callbacks for one key run in the order they were connected, and a key may
//! have any number of them.
//!
//! The table hands out a *snapshot* of a key's callbacks rather than
//! iterating in place. Callbacks frequently mutate the structure that owns
//! the table (a widget callback adds or removes widgets, for instance), so
//! the caller clones the `Rc` list, drops its borrow, and only then invokes.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use fifteen_core::Slots;
//!
//! let hits = Rc::new(Cell::new(0));
//! let mut slots: Slots<u8, dyn Fn()> = Slots::new();
//!
//! let counter = hits.clone();
//! slots.connect(1, Rc::new(move || counter.set(counter.get() + 1)));
//!
//! for slot in slots.snapshot(&1) {
//!     slot();
//! }
//! assert_eq!(hits.get(), 1);
//! assert!(slots.snapshot(&2).is_empty());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// A table from event key to an ordered list of callbacks.
///
/// `C` is normally an unsized closure type such as
/// `dyn Fn(&mut Ctx, &Event) -> Result<()>`.
pub struct Slots<K, C: ?Sized> {
    slots: HashMap<K, Vec<Rc<C>>>,
}

impl<K, C: ?Sized> Default for Slots<K, C> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, C: ?Sized> Slots<K, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback to the list for `key`.
    pub fn connect(&mut self, key: K, slot: Rc<C>) {
        self.slots.entry(key).or_default().push(slot);
    }

    /// Clone the callbacks connected to `key`, in connection order.
    ///
    /// Returns an empty list when nothing is connected.
    pub fn snapshot(&self, key: &K) -> Vec<Rc<C>> {
        self.slots.get(key).cloned().unwrap_or_default()
    }

    /// Number of callbacks connected to `key`.
    pub fn connection_count(&self, key: &K) -> usize {
        self.slots.get(key).map_or(0, Vec::len)
    }
}

impl<K: fmt::Debug, C: ?Sized> fmt::Debug for Slots<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, list) in &self.slots {
            map.entry(key, &list.len());
        }
        map.finish()
    }
}
