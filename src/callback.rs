//! Listener Callback Abstraction
//!
//! Callbacks are opaque capabilities supplied by the embedding application.
//! The registry never inspects them beyond invoking them; logging identifies
//! listeners by their registered name or assigned id, not by the callback.

use crate::args::BoundArgs;

/// Error type a callback may surface to the dispatching caller.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a single callback invocation.
///
/// The `Ok` value is discarded by the registry; an `Err` propagates
/// unmodified to the caller of the dispatch operation.
pub type CallbackResult = Result<(), CallbackError>;

/// A listener callback: one synchronous invoke operation.
///
/// `payload` is the dispatch-time message (`None` when the sender supplied
/// nothing); `args` are the arguments bound at registration. Caller and
/// listener agree on the payload type `P` through the registry's type
/// parameter.
///
/// Implemented for any matching `Fn` closure, so plain closures and
/// function pointers register directly:
///
/// ```
/// use herald::{BoundArgs, CallbackResult};
///
/// fn on_ping(payload: Option<&u32>, _args: &BoundArgs) -> CallbackResult {
///     println!("ping: {:?}", payload);
///     Ok(())
/// }
/// # let _ = on_ping;
/// ```
pub trait Callback<P>: Send + Sync {
    /// Invoke the callback with a dispatch payload and the bound arguments.
    fn invoke(&self, payload: Option<&P>, args: &BoundArgs) -> CallbackResult;
}

impl<P, F> Callback<P> for F
where
    F: Fn(Option<&P>, &BoundArgs) -> CallbackResult + Send + Sync,
{
    fn invoke(&self, payload: Option<&P>, args: &BoundArgs) -> CallbackResult {
        self(payload, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_implements_callback() {
        let callback = |payload: Option<&u32>, _args: &BoundArgs| -> CallbackResult {
            assert_eq!(payload, Some(&7));
            Ok(())
        };
        let args = BoundArgs::new();
        assert!(callback.invoke(Some(&7), &args).is_ok());
    }

    #[test]
    fn test_callback_error_surfaces() {
        let callback = |_payload: Option<&u32>, _args: &BoundArgs| -> CallbackResult {
            Err("listener exploded".into())
        };
        let err = callback.invoke(None, &BoundArgs::new()).unwrap_err();
        assert_eq!(err.to_string(), "listener exploded");
    }
}
