use crate::validation::FieldErrors;
use std::borrow::Cow;

/// A specialized [`ContactError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ContactError {
    /// One or more fields failed validation; nothing was sent.
    #[error("Invalid contact details{}: {errors}", format_context(.context))]
    Validation { errors: FieldErrors, context: Option<Cow<'static, str>> },
    /// A submission is already in flight.
    #[error("A message is already being sent{}", format_context(.context))]
    Busy { context: Option<Cow<'static, str>> },
    /// The sink could not hand the message off.
    #[error("Message delivery failed{}: {message}", format_context(.context))]
    Delivery { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
