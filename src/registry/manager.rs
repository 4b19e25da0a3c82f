//! Event Registry
//!
//! Central coordinator for the pub/sub registry. Owns the event table,
//! resolves registration conflicts, flips mute state, and routes targeted
//! and broadcast dispatch to listener callbacks.

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::event::Event;
use crate::registry::listener::Listener;

/// Policy applied when a named registration collides with an existing
/// listener of the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictAction {
    /// Keep the existing listener and reject the new registration.
    #[default]
    Reject,

    /// Remove the existing listener and append the new one at the end of
    /// the sequence. The position is NOT preserved.
    Overwrite,
}

/// In-process publish/subscribe registry, generic over the payload type.
///
/// Events are created implicitly on first registration and hold their
/// listeners in registration order; that order is the broadcast order.
/// Dispatch is synchronous: callbacks run in-line on the caller's stack
/// before the dispatch call returns.
///
/// The registry is single-threaded by design. Mutating operations take
/// `&mut self`; cross-thread use must be serialized by the embedding
/// application.
#[derive(Debug)]
pub struct EventRegistry<P> {
    events: HashMap<String, Event<P>>,
    config: RegistryConfig,
    next_listener_id: u64,
}

impl<P> EventRegistry<P> {
    /// Create a registry with default (unlimited) configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with explicit capacity limits.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            events: HashMap::new(),
            config,
            next_listener_id: 1,
        }
    }

    /// Register a listener on an event, creating the event if absent.
    ///
    /// Anonymous listeners are appended unconditionally. A named listener
    /// whose name is already taken on the event is a conflict, resolved per
    /// `on_conflict`: [`ConflictAction::Reject`] keeps the existing listener
    /// and returns [`RegistryError::DuplicateListener`];
    /// [`ConflictAction::Overwrite`] removes the existing listener and
    /// appends the new one at the end of the broadcast order. Both conflict
    /// outcomes are also logged as warnings.
    pub fn register_listener(
        &mut self,
        event_name: &str,
        mut listener: Listener<P>,
        on_conflict: ConflictAction,
    ) -> RegistryResult<()> {
        if event_name.is_empty() {
            return Err(RegistryError::EmptyEventName);
        }

        if !self.events.contains_key(event_name) {
            if let Some(limit) = self.config.max_events {
                if self.events.len() >= limit {
                    return Err(RegistryError::capacity_exceeded("events", limit));
                }
            }
        }

        let listener_limit = self.config.max_listeners_per_event;
        let id = self.next_listener_id;
        let event = self
            .events
            .entry(event_name.to_string())
            .or_insert_with(|| Event::new(event_name));

        if let Some(name) = listener.name().map(str::to_string) {
            if event.contains(&name) {
                warn!("Listener '{}' already exists on event '{}'", name, event_name);
                match on_conflict {
                    ConflictAction::Reject => {
                        warn!("Rejecting new listener '{}'", name);
                        return Err(RegistryError::duplicate_listener(event_name, name));
                    }
                    ConflictAction::Overwrite => {
                        warn!("Overwriting listener '{}'", name);
                        event.remove(&name);
                    }
                }
            }
        }

        if let Some(limit) = listener_limit {
            if event.len() >= limit {
                return Err(RegistryError::capacity_exceeded("listeners", limit));
            }
        }

        listener.set_id(id);
        let label = listener.label();
        event.push(listener);
        self.next_listener_id += 1;

        debug!("Registered listener '{}' on event '{}'", label, event_name);
        Ok(())
    }

    /// Mute a named listener so it stops receiving messages.
    pub fn mute_listener(&mut self, event_name: &str, listener_name: &str) -> RegistryResult<()> {
        self.set_listener_mute(event_name, listener_name, true)
    }

    /// Unmute a named listener so it receives messages again.
    pub fn unmute_listener(&mut self, event_name: &str, listener_name: &str) -> RegistryResult<()> {
        self.set_listener_mute(event_name, listener_name, false)
    }

    /// Mute every listener of an event, named and anonymous alike.
    pub fn mute_event(&mut self, event_name: &str) -> RegistryResult<()> {
        self.set_event_mute(event_name, true)
    }

    /// Unmute every listener of an event.
    pub fn unmute_event(&mut self, event_name: &str) -> RegistryResult<()> {
        self.set_event_mute(event_name, false)
    }

    /// Remove exactly one named listener from an event.
    ///
    /// Remaining listeners keep their relative order. The event itself
    /// remains registered even when its last listener is destroyed.
    pub fn destroy_listener(&mut self, event_name: &str, listener_name: &str) -> RegistryResult<()> {
        let event = self
            .events
            .get_mut(event_name)
            .ok_or_else(|| RegistryError::event_not_found(event_name))?;

        match event.remove(listener_name) {
            Some(_) => {
                debug!("Destroyed listener '{}' on event '{}'", listener_name, event_name);
                Ok(())
            }
            None => Err(RegistryError::listener_not_found(event_name, listener_name)),
        }
    }

    /// Remove an event and all of its listeners.
    ///
    /// A subsequent registration under the same name creates a fresh event
    /// with no memory of prior listeners.
    pub fn destroy_event(&mut self, event_name: &str) -> RegistryResult<()> {
        match self.events.remove(event_name) {
            Some(event) => {
                debug!("Destroyed event '{}' ({} listeners)", event.name(), event.len());
                Ok(())
            }
            None => Err(RegistryError::event_not_found(event_name)),
        }
    }

    /// Send a message to exactly one named listener.
    ///
    /// Warns and returns a distinct error when the event is absent, the
    /// listener is absent, or the listener is muted. The callback's Ok value
    /// is discarded; a callback failure propagates unmodified.
    pub fn send_whisper(
        &self,
        event_name: &str,
        listener_name: &str,
        payload: Option<&P>,
    ) -> RegistryResult<()> {
        debug!("Event '{}' called as a whisper", event_name);

        let event = match self.events.get(event_name) {
            Some(event) => event,
            None => {
                warn!("Event '{}' does not exist; cannot send whisper", event_name);
                return Err(RegistryError::event_not_found(event_name));
            }
        };

        let listener = match event.get(listener_name) {
            Some(listener) => listener,
            None => {
                warn!(
                    "Listener '{}' does not exist for event '{}'; cannot send whisper",
                    listener_name, event_name
                );
                return Err(RegistryError::listener_not_found(event_name, listener_name));
            }
        };

        if listener.is_muted() {
            warn!(
                "Listener '{}' is muted; event '{}' was not received",
                listener_name, event_name
            );
            return Err(RegistryError::listener_muted(event_name, listener_name));
        }

        debug!("Calling listener '{}'", listener.label());
        listener.invoke(payload).map_err(RegistryError::Callback)
    }

    /// Broadcast a message to all non-muted listeners of an event, in
    /// registration order. Returns the number of listeners invoked.
    ///
    /// An absent event is a silent no-op (`Ok(0)`); muted listeners are
    /// skipped without warnings. The first callback failure propagates
    /// immediately and aborts delivery to the remaining listeners. There is
    /// no isolation between listeners.
    pub fn send_messages(&self, event_name: &str, payload: Option<&P>) -> RegistryResult<usize> {
        debug!("Event '{}' called", event_name);

        let event = match self.events.get(event_name) {
            Some(event) => event,
            None => return Ok(0),
        };

        // Snapshot the delivery set: one broadcast iterates a stable
        // sequence even if the embedder arranges mid-flight mutation.
        let batch: Vec<_> = event
            .listeners()
            .iter()
            .filter(|listener| !listener.is_muted())
            .map(|listener| {
                (
                    listener.label(),
                    listener.callback_handle(),
                    listener.bound_args().clone(),
                )
            })
            .collect();

        let mut delivered = 0;
        for (label, callback, args) in &batch {
            debug!("Calling listener '{}'", label);
            callback
                .invoke(payload, args)
                .map_err(RegistryError::Callback)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Number of registered events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Whether an event is registered under the given name.
    pub fn has_event(&self, event_name: &str) -> bool {
        self.events.contains_key(event_name)
    }

    /// Names of all registered events, in no particular order.
    pub fn event_names(&self) -> Vec<&str> {
        self.events.keys().map(String::as_str).collect()
    }

    /// Number of listeners on an event, 0 when the event is absent.
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.events.get(event_name).map_or(0, Event::len)
    }

    /// Whether the event has a listener with the given name.
    pub fn has_listener(&self, event_name: &str, listener_name: &str) -> bool {
        self.events
            .get(event_name)
            .is_some_and(|event| event.contains(listener_name))
    }

    /// Mute state of a named listener, `None` when event or listener is
    /// absent.
    pub fn is_muted(&self, event_name: &str, listener_name: &str) -> Option<bool> {
        self.events
            .get(event_name)?
            .get(listener_name)
            .map(Listener::is_muted)
    }

    /// Names of the event's named listeners, in registration order.
    /// Anonymous listeners are not listed.
    pub fn listener_names(&self, event_name: &str) -> Vec<&str> {
        match self.events.get(event_name) {
            Some(event) => event
                .listeners()
                .iter()
                .filter_map(Listener::name)
                .collect(),
            None => Vec::new(),
        }
    }

    fn set_listener_mute(
        &mut self,
        event_name: &str,
        listener_name: &str,
        muted: bool,
    ) -> RegistryResult<()> {
        let event = self
            .events
            .get_mut(event_name)
            .ok_or_else(|| RegistryError::event_not_found(event_name))?;

        match event.get_mut(listener_name) {
            Some(listener) => {
                listener.set_muted(muted);
                Ok(())
            }
            None => Err(RegistryError::listener_not_found(event_name, listener_name)),
        }
    }

    fn set_event_mute(&mut self, event_name: &str, muted: bool) -> RegistryResult<()> {
        match self.events.get_mut(event_name) {
            Some(event) => {
                for listener in event.listeners_mut() {
                    listener.set_muted(muted);
                }
                Ok(())
            }
            None => Err(RegistryError::event_not_found(event_name)),
        }
    }
}

impl<P> Default for EventRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
