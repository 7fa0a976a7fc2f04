use super::*;

use std::cell::Cell;

use futures::channel::oneshot;
use futures::executor::block_on;

/// Provider that records calls and answers with a fixed outcome.
struct FakeProvider {
    calls: Cell<usize>,
    outcome: Result<(), RelayError>,
}

impl FakeProvider {
    fn ok() -> Self {
        Self { calls: Cell::new(0), outcome: Ok(()) }
    }

    fn failing() -> Self {
        Self { calls: Cell::new(0), outcome: Err(RelayError::Transport("connection reset".to_owned())) }
    }
}

impl MailProvider for FakeProvider {
    async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

/// Provider whose first send stays pending until the test releases it.
struct GatedProvider {
    calls: Cell<usize>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MailProvider for GatedProvider {
    async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            rx.await.map_err(|_| RelayError::Transport("gate dropped".to_owned()))?;
        }
        Ok(())
    }
}

fn filled(email: &str) -> ContactState {
    let mut state = ContactState::default();
    state.set_field(ContactField::Name, "Ada Lovelace");
    state.set_field(ContactField::Email, email);
    state.set_field(ContactField::Subject, "Project Discussion");
    state.set_field(ContactField::Message, "Tell me about your project...");
    state
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn set_field_stores_sanitized_value() {
    let mut state = ContactState::default();
    state.set_field(ContactField::Message, "hi <script>alert(1)</script>there");
    assert_eq!(state.form.message, "hi there");

    state.set_field(ContactField::Name, r#"Bob onerror="x""#);
    assert!(!state.field(ContactField::Name).contains("onerror"));
}

#[test]
fn field_reads_back_each_slot() {
    let state = filled("ada@example.com");
    assert_eq!(state.field(ContactField::Name), "Ada Lovelace");
    assert_eq!(state.field(ContactField::Email), "ada@example.com");
    assert_eq!(state.field(ContactField::Subject), "Project Discussion");
    assert_eq!(state.field(ContactField::Message), "Tell me about your project...");
}

// =============================================================
// State machine
// =============================================================

#[test]
fn invalid_email_is_rejected_with_error_status() {
    let mut state = filled("not-an-email");
    assert_eq!(state.begin_submit(1_000), Err(SubmitRejection::InvalidEmail));
    assert_eq!(state.status, SubmitStatus::Error);
    assert!(!state.submitting);
    assert_eq!(state.status_expires_at_ms(), Some(4_000));
    assert_eq!(state.form.email, "not-an-email");
}

#[test]
fn begin_submit_sets_in_flight_and_returns_payload() {
    let mut state = filled("ada@example.com");
    let payload = state.begin_submit(0).expect("valid form");
    assert!(state.submitting);
    assert_eq!(payload, state.form);
}

#[test]
fn second_begin_while_in_flight_is_refused_without_side_effects() {
    let mut state = filled("ada@example.com");
    let _ = state.begin_submit(0).expect("first send");
    let before = state.clone();
    assert_eq!(state.begin_submit(10), Err(SubmitRejection::InFlight));
    assert_eq!(state, before);
}

#[test]
fn finish_success_clears_form() {
    let mut state = filled("ada@example.com");
    let _ = state.begin_submit(0).expect("send");
    assert_eq!(state.finish_submit(&Ok(()), 500), SubmitStatus::Success);
    assert!(!state.submitting);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn finish_failure_keeps_form() {
    let mut state = filled("ada@example.com");
    let _ = state.begin_submit(0).expect("send");
    let status = state.finish_submit(&Err(RelayError::Unavailable), 500);
    assert_eq!(status, SubmitStatus::Error);
    assert!(!state.submitting);
    assert_eq!(state.form.name, "Ada Lovelace");
}

#[test]
fn status_reverts_after_display_window() {
    let mut state = filled("ada@example.com");
    let _ = state.begin_submit(0).expect("send");
    let _ = state.finish_submit(&Ok(()), 1_000);

    assert!(!state.expire_status(3_999));
    assert_eq!(state.status, SubmitStatus::Success);
    assert!(state.expire_status(4_000));
    assert_eq!(state.status, SubmitStatus::Idle);
    assert!(!state.expire_status(10_000));
}

#[test]
fn newer_status_gets_its_own_window() {
    let mut state = filled("bad");
    let _ = state.begin_submit(0);
    state.set_field(ContactField::Email, "ada@example.com");
    let _ = state.begin_submit(2_000).expect("send");
    let _ = state.finish_submit(&Ok(()), 2_500);

    assert!(!state.expire_status(3_000));
    assert_eq!(state.status, SubmitStatus::Success);
    assert!(state.expire_status(5_500));
}

#[test]
fn form_stays_usable_after_error() {
    let mut state = filled("ada@example.com");
    let _ = state.begin_submit(0).expect("send");
    let _ = state.finish_submit(&Err(RelayError::Unavailable), 0);
    assert!(state.begin_submit(100).is_ok());
}

// =============================================================
// submit()
// =============================================================

#[test]
fn submit_with_invalid_email_makes_no_network_call() {
    let store = RefCell::new(filled("not-an-email"));
    let provider = FakeProvider::ok();
    let status = block_on(submit(&store, &provider, || 0));
    assert_eq!(status, Some(SubmitStatus::Error));
    assert_eq!(provider.calls.get(), 0);
}

#[test]
fn submit_success_clears_fields_and_reverts_after_three_seconds() {
    let store = RefCell::new(filled("ada@example.com"));
    let provider = FakeProvider::ok();
    let clock = Cell::new(10_000);

    let status = block_on(submit(&store, &provider, || clock.get()));
    assert_eq!(status, Some(SubmitStatus::Success));
    assert_eq!(provider.calls.get(), 1);
    assert_eq!(store.borrow().form, ContactForm::default());

    clock.set(13_000);
    assert!(store.borrow_mut().expire_status(clock.get()));
    assert_eq!(store.borrow().status, SubmitStatus::Idle);
}

#[test]
fn submit_failure_keeps_fields_and_reverts_after_three_seconds() {
    let store = RefCell::new(filled("ada@example.com"));
    let provider = FakeProvider::failing();

    let status = block_on(submit(&store, &provider, || 0));
    assert_eq!(status, Some(SubmitStatus::Error));
    assert_eq!(provider.calls.get(), 1);
    assert_eq!(store.borrow().form.subject, "Project Discussion");
    assert!(!store.borrow().submitting);

    assert!(store.borrow_mut().expire_status(STATUS_DISPLAY_MS));
    assert_eq!(store.borrow().status, SubmitStatus::Idle);
}

#[test]
fn submit_while_in_flight_makes_no_second_call() {
    let store = RefCell::new(filled("ada@example.com"));
    let (tx, rx) = oneshot::channel();
    let provider = GatedProvider { calls: Cell::new(0), gate: RefCell::new(Some(rx)) };

    let (first, second) = block_on(async {
        futures::join!(submit(&store, &provider, || 0), async {
            let second = submit(&store, &provider, || 0).await;
            assert!(store.borrow().submitting);
            let _ = tx.send(());
            second
        })
    });

    assert_eq!(provider.calls.get(), 1);
    assert_eq!(second, Some(SubmitStatus::Idle));
    assert_eq!(first, Some(SubmitStatus::Success));
    assert!(!store.borrow().submitting);

    // The gate is released, so a fresh submission goes through again.
    store.borrow_mut().set_field(ContactField::Email, "ada@example.com");
    let third = block_on(submit(&store, &provider, || 0));
    assert_eq!(third, Some(SubmitStatus::Success));
    assert_eq!(provider.calls.get(), 2);
}

// =============================================================
// hold_status()
// =============================================================

#[test]
fn hold_status_resleeps_after_early_wake() {
    let store = RefCell::new(filled("ada@example.com"));
    let clock = Cell::new(1_000);
    let _ = block_on(submit(&store, &FakeProvider::ok(), || clock.get()));
    assert_eq!(store.borrow().status_expires_at_ms(), Some(4_000));

    // First timer fires 1 ms short of the requested wait.
    let waits = RefCell::new(Vec::new());
    block_on(hold_status(&store, || clock.get(), |ms| {
        let early = waits.borrow().is_empty();
        waits.borrow_mut().push(ms);
        clock.set(clock.get() + if early { ms - 1 } else { ms });
        std::future::ready(())
    }));

    assert_eq!(*waits.borrow(), vec![3_000, 1]);
    assert_eq!(store.borrow().status, SubmitStatus::Idle);
    assert_eq!(store.borrow().status_expires_at_ms(), None);
}

#[test]
fn hold_status_survives_clock_stepping_back() {
    let store = RefCell::new(filled("ada@example.com"));
    let _ = block_on(submit(&store, &FakeProvider::failing(), || 10_000));

    let clock = Cell::new(10_000);
    let calls = Cell::new(0);
    block_on(hold_status(&store, || clock.get(), |ms| {
        calls.set(calls.get() + 1);
        // The first sleep lands while the clock has been wound back.
        if calls.get() == 1 {
            clock.set(9_000);
        } else {
            clock.set(clock.get() + ms);
        }
        std::future::ready(())
    }));

    assert_eq!(calls.get(), 2);
    assert_eq!(store.borrow().status, SubmitStatus::Idle);
}

#[test]
fn hold_status_leaves_newer_status_alone() {
    let store = RefCell::new(filled("ada@example.com"));
    let _ = block_on(submit(&store, &FakeProvider::ok(), || 0));

    block_on(hold_status(&store, || 2_000, |_| {
        // A new error lands before the old window closes.
        store.borrow_mut().set_field(ContactField::Email, "broken");
        let _ = store.borrow_mut().begin_submit(2_000);
        std::future::ready(())
    }));

    assert_eq!(store.borrow().status, SubmitStatus::Error);
    assert_eq!(store.borrow().status_expires_at_ms(), Some(5_000));
}

#[test]
fn hold_status_is_noop_without_a_status() {
    let store = RefCell::new(ContactState::default());
    let slept = Cell::new(false);
    block_on(hold_status(&store, || 0, |_| {
        slept.set(true);
        std::future::ready(())
    }));
    assert!(!slept.get());
}
