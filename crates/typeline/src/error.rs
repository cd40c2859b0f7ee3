//! Error types for Typeline.

use thiserror::Error;

/// Faults raised by a presentation surface.
///
/// The controller performs no defensive checking around these: a surface
/// fault is the host platform's problem (a selector that stopped matching,
/// a torn-down view) and is propagated unchanged to the caller driving the
/// event loop.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// No element in the host document matches the surface's selector.
    #[error("no element matches selector `{selector}`")]
    ElementNotFound {
        /// The selector that failed to resolve.
        selector: String,
    },

    /// A host-specific fault outside Typeline's vocabulary.
    #[error("surface backend fault: {0}")]
    Backend(String),
}

/// A specialized Result type for Typeline operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;
