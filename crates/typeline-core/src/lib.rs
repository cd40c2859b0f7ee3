//! Core systems for Typeline.
//!
//! This crate provides the plumbing shared by Typeline widgets:
//!
//! - **Signal/Slot System**: Type-safe notification of observers
//! - **Logging targets**: `tracing` target names for log filtering
//!
//! Typeline widgets run on a single-threaded, cooperative UI event loop:
//! every operation runs to completion on the thread delivering the input
//! event. Signals here reflect that model — emission always invokes the
//! connected slots directly, in connection order, before returning.
//!
//! # Signal/Slot Example
//!
//! ```
//! use typeline_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
