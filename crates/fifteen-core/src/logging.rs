//! Logging facilities for fifteen.
//!
//! fifteen uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("fifteen::puzzle=debug,fifteen::dispatch=trace")
//!     .init();
//! ```
//!
//! Per-event dispatch is logged at `trace`, gesture and reordering decisions
//! at `debug`, and degenerate input (an empty viewport, say) at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Widget tree structure changes and event notification.
    pub const WIDGET: &str = "fifteen::widget";
    /// Pointer diffing and event synthesis in the root controller.
    pub const DISPATCH: &str = "fifteen::dispatch";
    /// Puzzle grid ordering, swaps and drag gestures.
    pub const PUZZLE: &str = "fifteen::puzzle";
    /// Style loading.
    pub const STYLE: &str = "fifteen::style";
    /// Game shell commands and resizing.
    pub const GAME: &str = "fifteen::game";
}

/// Span names used throughout fifteen for tracing.
pub mod span_names {
    /// One dispatcher tick.
    pub const TICK: &str = "fifteen::tick";
    /// One draw pass.
    pub const DRAW: &str = "fifteen::draw";
}
