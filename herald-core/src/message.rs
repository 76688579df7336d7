//! Message trait for payload-bearing message kinds.

/// A marker trait for payload-bearing messages.
///
/// Each type implementing `Message` is its own message kind: the dispatcher
/// keys subscriber lists by the exact type, so there is no fan-out to
/// wrapper, super- or sub-types.
///
/// Messages must be `Send + Sync + 'static` so that a dispatcher can be
/// shared across threads and kinds can be identified by `TypeId`.
///
/// # Example
///
/// ```rust
/// use herald_core::Message;
///
/// #[derive(Debug, Clone)]
/// struct ScoreChanged { points: u32 }
///
/// impl Message for ScoreChanged {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must implement `Message` and be `Send + Sync + 'static`",
    note = "Add `impl Message for {Self} {{}}` or `#[derive(Message)]`."
)]
pub trait Message: Send + Sync + 'static {}

// Common Message implementations
impl Message for () {}
impl Message for bool {}
impl Message for i32 {}
impl Message for u32 {}
impl Message for i64 {}
impl Message for u64 {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
