//! In-Process Publish/Subscribe Event Registry
//!
//! A registry that lets components ("listeners") register named callbacks
//! against named events, then later dispatch messages to those callbacks.
//! Dispatch is synchronous: callbacks run in-line on the caller's stack.
//!
//! # Architecture
//!
//! - **EventRegistry**: Central coordinator owning events and routing dispatch
//! - **Events**: Named channels, created implicitly on first registration
//! - **Listeners**: (callback, optional name, mute flag, bound args) records
//! - **Whisper**: Targeted dispatch to exactly one named listener
//! - **Broadcast**: Dispatch to all non-muted listeners, in registration order
//!
//! Diagnostics flow through the [`log`] facade: dispatch tracing at debug
//! level, registration conflicts and whisper misses at warn level. Embedding
//! applications install whatever logger backend they like.
//!
//! # Example Usage
//!
//! ```
//! use herald::{BoundArgs, ConflictAction, EventRegistry, Listener};
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> herald::RegistryResult<()> {
//! let mut registry = EventRegistry::<i64>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let listener = Listener::named("tracker", move |payload: Option<&i64>, args: &BoundArgs| {
//!     sink.lock().unwrap().push((payload.copied(), args.get("tag").cloned()));
//!     Ok(())
//! })
//! .with_args(BoundArgs::new().with("tag", "x"));
//!
//! registry.register_listener("ping", listener, ConflictAction::Reject)?;
//! registry.send_messages("ping", Some(&5))?;
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod callback;
pub mod config;
pub mod error;
pub mod registry;

// Re-export core types for convenience
pub use args::BoundArgs;
pub use callback::{Callback, CallbackError, CallbackResult};
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use registry::{ConflictAction, EventRegistry, Listener};
