//! Logging facilities for Typeline.
//!
//! Typeline uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "typeline_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typeline_core::signal";
    /// Typeahead controller target.
    pub const TYPEAHEAD: &str = "typeline::typeahead";
}
