use crate::error::BoxError;

/// Conversion from a subscriber's return value into a delivery outcome.
///
/// A subscriber closure may return `()` when it cannot fail, or
/// `Result<(), E>` when it can. An `Err` counts as a subscriber fault and
/// stops the remaining fan-out of that publish.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), E>` where `E: Into<BoxError>` → the error becomes the fault
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid subscriber return type",
    label = "subscribers must return `()` or `Result<(), E>`",
    note = "The error type must convert into `BoxError` (any `std::error::Error + Send + Sync`, `String` or `&str`)."
)]
pub trait IntoOutcome {
    /// Convert the return value into success or a fault.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
