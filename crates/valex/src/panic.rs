//! Panic payload formatting helpers.
//!
//! Maker bodies are treated as fallible end-to-end, but a fault inside one
//! (an arithmetic overflow, say) must not abort the whole parse. The
//! dispatcher catches the unwind and uses this helper to turn the payload
//! into a readable message.

use std::any::Any;

/// Formats a panic payload into a readable message.
///
/// String payloads are extracted directly; anything else falls back to its
/// [`Debug`](core::fmt::Debug) rendering.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use valex::panic_message;
///
/// let payload: Box<dyn Any + Send> = Box::new("boom");
/// assert_eq!(panic_message(payload.as_ref()), "boom");
/// ```
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| format!("{payload:?}"))
}
