use folio_contact::{
    ContactDraft, ContactError, ContactField, ContactForm, MessageSink, Phase, SimulatedSink,
    submit,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, advance};

const BANNER: Duration = Duration::from_secs(3);

fn filled() -> Arc<Mutex<ContactForm>> {
    let mut form = ContactForm::new();
    form.update(ContactField::Name, "John Doe");
    form.update(ContactField::Email, "john@example.com");
    form.update(ContactField::Message, "Hello, nice portfolio!");
    Arc::new(Mutex::new(form))
}

struct Refusing;

impl MessageSink for Refusing {
    async fn deliver(&self, _draft: &ContactDraft) -> Result<(), ContactError> {
        Err(ContactError::Delivery { message: "mailbox full".into(), context: None })
    }
}

#[tokio::test(start_paused = true)]
async fn simulated_send_takes_half_a_second_then_banner_three() {
    let form = filled();
    let started = Instant::now();

    let task = {
        let form = form.clone();
        tokio::spawn(async move { submit(&form, &SimulatedSink::default(), BANNER).await })
    };

    tokio::task::yield_now().await;
    assert_eq!(form.lock().phase(), Phase::Sending);

    advance(Duration::from_millis(500)).await;
    tokio::task::yield_now().await;
    assert_eq!(form.lock().phase(), Phase::Sent);
    assert_eq!(form.lock().draft(), &ContactDraft::default());

    task.await.expect("join").expect("submitted");
    assert_eq!(form.lock().phase(), Phase::Idle);
    assert!(started.elapsed() >= Duration::from_millis(3500));
}

#[tokio::test(start_paused = true)]
async fn invalid_draft_never_reaches_sink() {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    let err = submit(&form, &Refusing, BANNER).await.expect_err("invalid");

    assert!(matches!(err, ContactError::Validation { .. }));
    assert_eq!(form.lock().errors().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn failed_delivery_keeps_draft() {
    let form = filled();
    let err = submit(&form, &Refusing, BANNER).await.expect_err("refused");

    assert!(err.to_string().contains("mailbox full"));
    let form = form.lock();
    assert_eq!(form.phase(), Phase::Idle);
    assert_eq!(form.draft().email, "john@example.com");
}
