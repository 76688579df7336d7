//! Integer-tagged signals.

use std::fmt;

/// Registry key of a payload-less signal.
///
/// Any `i32` converts into a `Tag`, so `dispatcher.publish_signal(7)` works
/// directly. Enums implementing [`Signal`] should also provide
/// `From<Enum> for Tag` (the `#[derive(Signal)]` macro emits both).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub i32);

impl Tag {
    /// Returns the raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag(value)
    }
}

impl From<Tag> for i32 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag={}", self.0)
    }
}

/// A named signal that maps onto a [`Tag`].
///
/// Typically implemented by fieldless enums whose discriminants are the
/// tags, e.g. the states of a UI flow.
///
/// # Example
///
/// ```rust
/// use herald_core::{Signal, Tag};
///
/// #[derive(Debug, Clone, Copy)]
/// enum Screen {
///     Opened = 1,
///     Closed = 2,
/// }
///
/// impl Signal for Screen {
///     fn tag(&self) -> Tag {
///         Tag(*self as i32)
///     }
/// }
///
/// impl From<Screen> for Tag {
///     fn from(screen: Screen) -> Self {
///         screen.tag()
///     }
/// }
///
/// assert_eq!(Tag::from(Screen::Closed), Tag(2));
/// ```
pub trait Signal {
    /// The registry key for this signal.
    fn tag(&self) -> Tag;
}

impl Signal for Tag {
    fn tag(&self) -> Tag {
        *self
    }
}

impl Signal for i32 {
    fn tag(&self) -> Tag {
        Tag(*self)
    }
}
