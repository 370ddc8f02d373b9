//! Contact form feature.
//!
//! [`ContactForm`] is the form's state machine (draft, per-field errors, sending
//! and success-banner phases). [`submit`] drives one submission through a
//! [`MessageSink`]; the stock [`SimulatedSink`] waits a fixed delay and reports
//! success, since the site has no mail backend.

mod error;
mod form;
mod sink;
pub mod validation;

pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::form::{ContactForm, FormHandle, Phase, Ticket, submit};
pub use crate::sink::{MessageSink, SimulatedSink};
pub use crate::validation::FieldErrors;
pub use folio_domain::{ContactDraft, ContactField};
