//! Subscriber registries.
//!
//! - [`SubscriberList`]: one ordered list of subscribers
//! - [`TypedRegistry`]: one list per message kind, keyed by `TypeId`
//! - [`TaggedRegistry`]: one list per signal [`Tag`](herald_core::Tag)
//!
//! Lists are created on first registration and only forgotten by `clear`.

mod list;
mod tagged;
mod typed;

pub use list::SubscriberList;
pub use tagged::TaggedRegistry;
pub use typed::TypedRegistry;
