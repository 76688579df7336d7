//! Subscriber handles.
//!
//! Closures cannot be compared, so subscribers are wrapped in
//! reference-counted handles that compare by identity. Keep the handle (or a
//! clone of it) around to unregister later:
//!
//! ```rust
//! use herald_core::{Message, Subscriber};
//!
//! struct Ping;
//! impl Message for Ping {}
//!
//! let a = Subscriber::new(|_: &Ping| {});
//! let b = Subscriber::new(|_: &Ping| {});
//!
//! assert_eq!(a, a.clone());
//! assert_ne!(a, b);
//! ```

use crate::{error::BoxError, message::Message, outcome::IntoOutcome};
use std::{fmt, sync::Arc};

type MessageFn<M> = dyn Fn(&M) -> Result<(), BoxError> + Send + Sync;
type SignalFn = dyn Fn() -> Result<(), BoxError> + Send + Sync;

/// A subscriber to message kind `M`.
///
/// Cloning is O(1) and yields an equal handle. Two handles built from
/// separate [`Subscriber::new`] calls are never equal, even for identical
/// closures.
pub struct Subscriber<M> {
    inner: Arc<MessageFn<M>>,
}

impl<M: Message> Subscriber<M> {
    /// Wrap a closure returning `()` or `Result<(), E>`.
    ///
    /// A closure whose body only diverges (`panic!`, `unimplemented!`) has
    /// return type `!`, which is not an [`IntoOutcome`]. Annotate it as
    /// `|_: &M| -> () { ... }`.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&M) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        Self {
            inner: Arc::new(move |message: &M| f(message).into_outcome()),
        }
    }

    /// Invoke the subscriber.
    pub fn call(&self, message: &M) -> Result<(), BoxError> {
        (self.inner)(message)
    }
}

impl<M> Subscriber<M> {
    /// Returns `true` if both handles refer to the same subscriber.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<M> Clone for Subscriber<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> PartialEq for Subscriber<M> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<M> Eq for Subscriber<M> {}

impl<M> fmt::Debug for Subscriber<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subscriber")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

/// A zero-argument subscriber to a signal tag.
///
/// Same identity semantics as [`Subscriber`].
#[derive(Clone)]
pub struct SignalSubscriber {
    inner: Arc<SignalFn>,
}

impl SignalSubscriber {
    /// Wrap a closure returning `()` or `Result<(), E>`.
    ///
    /// Diverging closures need an explicit `-> ()`, as for [`Subscriber::new`].
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        Self {
            inner: Arc::new(move || f().into_outcome()),
        }
    }

    /// Invoke the subscriber.
    pub fn call(&self) -> Result<(), BoxError> {
        (self.inner)()
    }

    /// Returns `true` if both handles refer to the same subscriber.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SignalSubscriber {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for SignalSubscriber {}

impl fmt::Debug for SignalSubscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignalSubscriber")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
