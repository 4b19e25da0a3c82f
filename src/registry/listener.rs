//! Listener Records

use std::fmt;
use std::sync::Arc;

use crate::args::BoundArgs;
use crate::callback::{Callback, CallbackResult};

/// A registered listener: a callback plus its registration identity.
///
/// Named listeners can be individually targeted, muted, and destroyed;
/// anonymous listeners only ever receive broadcasts. Each listener carries
/// the [`BoundArgs`] captured at registration, forwarded on every dispatch.
pub struct Listener<P> {
    id: u64,
    name: Option<String>,
    muted: bool,
    callback: Arc<dyn Callback<P>>,
    bound_args: BoundArgs,
}

impl<P> Listener<P> {
    /// Create an anonymous listener.
    ///
    /// Anonymous listeners never collide with each other, but cannot be
    /// targeted by whisper, mute, or destroy operations later.
    pub fn anonymous(callback: impl Callback<P> + 'static) -> Self {
        Self {
            id: 0,
            name: None,
            muted: false,
            callback: Arc::new(callback),
            bound_args: BoundArgs::new(),
        }
    }

    /// Create a named listener.
    ///
    /// The name is the listener's identity within its event: at most one
    /// listener per event may carry a given name.
    pub fn named(name: impl Into<String>, callback: impl Callback<P> + 'static) -> Self {
        Self {
            id: 0,
            name: Some(name.into()),
            muted: false,
            callback: Arc::new(callback),
            bound_args: BoundArgs::new(),
        }
    }

    /// Attach bound arguments, forwarded to the callback on every dispatch.
    pub fn with_args(mut self, args: BoundArgs) -> Self {
        self.bound_args = args;
        self
    }

    /// The listener's registered name, `None` for anonymous listeners.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the listener is currently muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The arguments bound at registration.
    pub fn bound_args(&self) -> &BoundArgs {
        &self.bound_args
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    pub(crate) fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Stable identity for diagnostics: the registered name, or the
    /// registry-assigned id for anonymous listeners.
    pub(crate) fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("anonymous#{}", self.id),
        }
    }

    pub(crate) fn callback_handle(&self) -> Arc<dyn Callback<P>> {
        Arc::clone(&self.callback)
    }

    pub(crate) fn invoke(&self, payload: Option<&P>) -> CallbackResult {
        self.callback.invoke(payload, &self.bound_args)
    }
}

impl<P> fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("muted", &self.muted)
            .field("bound_args", &self.bound_args)
            .finish_non_exhaustive()
    }
}
