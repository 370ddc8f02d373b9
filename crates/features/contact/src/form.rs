use crate::error::ContactError;
use crate::sink::MessageSink;
use crate::validation::{self, FieldErrors};
use folio_domain::{ContactDraft, ContactField};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Submit button disabled, spinner shown.
    Sending,
    /// Success banner shown; returns to `Idle` after the banner timeout.
    Sent,
}

/// Identifies one submission. Late completions or dismissals carrying an
/// outdated ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// State of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    phase: Phase,
    generation: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending)
    }

    #[must_use]
    pub const fn banner_visible(&self) -> bool {
        matches!(self.phase, Phase::Sent)
    }

    /// Stores a keystroke and drops the stale error for that field.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Validates the draft and moves to [`Phase::Sending`].
    ///
    /// A new submission supersedes a visible success banner.
    ///
    /// # Errors
    /// [`ContactError::Busy`] while a send is in flight, or
    /// [`ContactError::Validation`] (with the errors also kept on the form).
    pub fn begin_submit(&mut self) -> Result<(Ticket, ContactDraft), ContactError> {
        if self.is_sending() {
            return Err(ContactError::Busy { context: None });
        }
        if let Err(errors) = validation::validate(&self.draft) {
            self.errors = errors.clone();
            return Err(ContactError::Validation { errors, context: None });
        }

        self.errors = FieldErrors::default();
        self.generation += 1;
        self.phase = Phase::Sending;
        Ok((Ticket(self.generation), self.draft.clone()))
    }

    /// Marks the submission as delivered: clears the draft and shows the banner.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if !self.owns(ticket) || !self.is_sending() {
            return false;
        }
        self.draft.clear();
        self.phase = Phase::Sent;
        true
    }

    /// Delivery failed; back to editing with the draft intact.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if !self.owns(ticket) || !self.is_sending() {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    /// Hides the success banner, unless a newer submission took over.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if !self.owns(ticket) || !self.banner_visible() {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    const fn owns(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Shared access to a [`ContactForm`] owned elsewhere (a UI signal, a mutex).
pub trait FormHandle {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormHandle for Arc<Mutex<ContactForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut *self.lock())
    }
}

/// Runs one submission end to end: validate, deliver through `sink`, show the
/// banner for `banner` and hide it again.
///
/// The handle is only borrowed between awaits, so the UI keeps rendering while
/// the message is in flight.
///
/// # Errors
/// Validation and busy errors from [`ContactForm::begin_submit`], or the sink's
/// delivery error (the form is back in [`Phase::Idle`] with the draft kept).
pub async fn submit<H, S>(handle: &H, sink: &S, banner: Duration) -> Result<(), ContactError>
where
    H: FormHandle,
    S: MessageSink,
{
    let (ticket, draft) = handle.with_form(ContactForm::begin_submit)?;

    if let Err(err) = sink.deliver(&draft).await {
        tracing::warn!(error = %err, "Contact message was not delivered");
        handle.with_form(|form| form.fail(ticket));
        return Err(err);
    }

    handle.with_form(|form| form.complete(ticket));
    tracing::info!(from = %draft.email, "Contact message sent");

    tokio::time::sleep(banner).await;
    handle.with_form(|form| form.dismiss(ticket));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(ContactField::Name, "John Doe");
        form.update(ContactField::Email, "john@example.com");
        form.update(ContactField::Message, "Hello, nice portfolio!");
        form
    }

    #[test]
    fn invalid_draft_stays_idle_with_errors() {
        let mut form = ContactForm::new();
        let err = form.begin_submit().expect_err("empty draft");

        assert!(matches!(err, ContactError::Validation { .. }));
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn typing_clears_that_fields_error() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();
        form.update(ContactField::Name, "J");

        assert_eq!(form.error_for(ContactField::Name), None);
        assert!(form.error_for(ContactField::Email).is_some());
    }

    #[test]
    fn full_cycle() {
        let mut form = filled();
        let (ticket, sent) = form.begin_submit().expect("valid");
        assert_eq!(sent.name, "John Doe");
        assert!(form.is_sending());
        assert!(matches!(form.begin_submit(), Err(ContactError::Busy { .. })));

        assert!(form.complete(ticket));
        assert!(form.banner_visible());
        assert_eq!(form.draft(), &ContactDraft::default());

        assert!(form.dismiss(ticket));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn stale_ticket_cannot_hide_newer_banner() {
        let mut form = filled();
        let (first, _) = form.begin_submit().expect("valid");
        form.complete(first);

        form.update(ContactField::Name, "Jane");
        form.update(ContactField::Email, "jane@example.com");
        form.update(ContactField::Message, "Second message here");
        let (second, _) = form.begin_submit().expect("valid");
        form.complete(second);

        assert!(!form.dismiss(first));
        assert!(form.banner_visible());
        assert!(form.dismiss(second));
    }

    #[test]
    fn failure_keeps_draft() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().expect("valid");
        assert!(form.fail(ticket));

        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.draft().name, "John Doe");
        assert!(!form.complete(ticket));
    }
}
