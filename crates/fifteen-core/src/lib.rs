//! Core systems for fifteen.
//!
//! This crate provides the foundational pieces the widget layer is built on:
//!
//! - **Widget ids**: [`WidgetId`], the arena key every widget is addressed by
//! - **Callback tables**: [`Slots`], an ordered event-kind to callback map
//! - **Errors**: [`TreeError`] for widget hierarchy invariant violations
//! - **Logging**: tracing target names shared by all fifteen crates
//!
//! # Callback Example
//!
//! ```
//! use std::rc::Rc;
//! use fifteen_core::Slots;
//!
//! let mut slots: Slots<&'static str, dyn Fn(i32) -> i32> = Slots::new();
//! slots.connect("double", Rc::new(|v: i32| v * 2));
//! slots.connect("double", Rc::new(|v: i32| v + v));
//!
//! let results: Vec<i32> = slots.snapshot(&"double").iter().map(|slot| slot(21)).collect();
//! assert_eq!(results, vec![42, 42]);
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod slots;

pub use error::{Result, TreeError};
pub use object::WidgetId;
pub use slots::Slots;
