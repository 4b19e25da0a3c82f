//! Registry Error Types
//!
//! Defines error types for registry operations. Usage conflicts (duplicate
//! names, missing targets) are non-fatal: the registry logs a warning where
//! the conflict is observable and leaves its state untouched, and the typed
//! error lets callers react programmatically instead of scraping logs.

use thiserror::Error;

use crate::callback::CallbackError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Registration was attempted with an empty event name
    #[error("Event name must not be empty")]
    EmptyEventName,

    /// A listener with the same name already exists on the event
    #[error("Listener '{listener}' already exists on event '{event}'")]
    DuplicateListener { event: String, listener: String },

    /// No event is registered under the given name
    #[error("Event '{0}' does not exist")]
    EventNotFound(String),

    /// The event has no listener with the given name
    #[error("Listener '{listener}' does not exist for event '{event}'")]
    ListenerNotFound { event: String, listener: String },

    /// The whisper target is muted and did not receive the message
    #[error("Listener '{listener}' is muted on event '{event}'")]
    ListenerMuted { event: String, listener: String },

    /// A configured capacity limit was reached
    #[error("Maximum number of {what} ({limit}) reached")]
    CapacityExceeded { what: &'static str, limit: usize },

    /// A listener callback failed; the failure surfaces unmodified
    #[error(transparent)]
    Callback(CallbackError),
}

impl RegistryError {
    /// Create a duplicate listener error
    pub fn duplicate_listener(event: impl Into<String>, listener: impl Into<String>) -> Self {
        Self::DuplicateListener {
            event: event.into(),
            listener: listener.into(),
        }
    }

    /// Create an event not found error
    pub fn event_not_found(event: impl Into<String>) -> Self {
        Self::EventNotFound(event.into())
    }

    /// Create a listener not found error
    pub fn listener_not_found(event: impl Into<String>, listener: impl Into<String>) -> Self {
        Self::ListenerNotFound {
            event: event.into(),
            listener: listener.into(),
        }
    }

    /// Create a listener muted error
    pub fn listener_muted(event: impl Into<String>, listener: impl Into<String>) -> Self {
        Self::ListenerMuted {
            event: event.into(),
            listener: listener.into(),
        }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(what: &'static str, limit: usize) -> Self {
        Self::CapacityExceeded { what, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = RegistryError::duplicate_listener("ping", "L1");
        assert_eq!(error.to_string(), "Listener 'L1' already exists on event 'ping'");

        let error = RegistryError::event_not_found("ping");
        assert_eq!(error.to_string(), "Event 'ping' does not exist");

        let error = RegistryError::listener_muted("ping", "L1");
        assert_eq!(error.to_string(), "Listener 'L1' is muted on event 'ping'");

        let error = RegistryError::capacity_exceeded("listeners", 8);
        assert_eq!(error.to_string(), "Maximum number of listeners (8) reached");
    }

    #[test]
    fn test_callback_error_is_transparent() {
        let inner: CallbackError = "listener exploded".into();
        let error = RegistryError::Callback(inner);
        assert_eq!(error.to_string(), "listener exploded");
    }
}
