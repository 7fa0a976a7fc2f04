//! Contact form state and submission flow.
//!
//! DESIGN
//! ======
//! `ContactState` is a synchronous state machine: field edits are sanitized
//! as they arrive, `begin_submit` gates on the in-flight flag and email
//! shape, and `finish_submit` records the terminal status with a fixed
//! display window. `submit` strings those steps around the single provider
//! call, borrowing the state only between await points.
//!
//! TRADE-OFFS
//! ==========
//! The in-flight flag is a plain boolean gate, not a lock. It is enough
//! because everything runs on one cooperative thread.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::*;
use serde::Serialize;

use crate::net::emailjs::{MailProvider, RelayError};
use crate::util::email::is_valid_email;
use crate::util::sanitize::strip_active_content;

/// How long a success/error banner stays up before reverting to idle.
pub const STATUS_DISPLAY_MS: u64 = 3_000;

/// Four free-text fields; serialized as the provider's template params.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Reasons a submission is refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("a message is already being sent")]
    InFlight,
    #[error("email address is malformed")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub submitting: bool,
    status_expires_at_ms: Option<u64>,
}

impl ContactState {
    /// Store a sanitized value for one field.
    pub fn set_field(&mut self, field: ContactField, raw: &str) {
        let value = strip_active_content(raw);
        let slot = match field {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Subject => &mut self.form.subject,
            ContactField::Message => &mut self.form.message,
        };
        *slot = value;
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.form.name,
            ContactField::Email => &self.form.email,
            ContactField::Subject => &self.form.subject,
            ContactField::Message => &self.form.message,
        }
    }

    /// Gate a new send and hand back the payload to deliver.
    ///
    /// # Errors
    ///
    /// `InFlight` leaves state untouched. `InvalidEmail` shows the error
    /// status for the usual display window.
    pub fn begin_submit(&mut self, now_ms: u64) -> Result<ContactForm, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }
        if !is_valid_email(&self.form.email) {
            self.show_status(SubmitStatus::Error, now_ms);
            return Err(SubmitRejection::InvalidEmail);
        }
        self.submitting = true;
        Ok(self.form.clone())
    }

    /// Record the provider outcome. Success clears the form.
    pub fn finish_submit(&mut self, outcome: &Result<(), RelayError>, now_ms: u64) -> SubmitStatus {
        self.submitting = false;
        let status = if outcome.is_ok() {
            self.form.clear();
            SubmitStatus::Success
        } else {
            SubmitStatus::Error
        };
        self.show_status(status, now_ms);
        status
    }

    /// Revert to idle once the latest status window has elapsed.
    pub fn expire_status(&mut self, now_ms: u64) -> bool {
        match self.status_expires_at_ms {
            Some(until) if now_ms >= until => {
                self.status = SubmitStatus::Idle;
                self.status_expires_at_ms = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn status_expires_at_ms(&self) -> Option<u64> {
        self.status_expires_at_ms
    }

    fn show_status(&mut self, status: SubmitStatus, now_ms: u64) {
        self.status = status;
        self.status_expires_at_ms = Some(now_ms.saturating_add(STATUS_DISPLAY_MS));
    }
}

/// Holder of `ContactState` that can be borrowed mutably between awaits.
pub trait ContactStore {
    /// Run `f` against the state; `None` if the state is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R>;
}

impl ContactStore for RefCell<ContactState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl ContactStore for RwSignal<ContactState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run one submission attempt: gate, deliver once, record the outcome.
///
/// Returns the status left in the store, or `None` if the store was
/// disposed (e.g. the panel unmounted mid-send).
pub async fn submit<S, P>(store: &S, provider: &P, now_ms: impl Fn() -> u64) -> Option<SubmitStatus>
where
    S: ContactStore,
    P: MailProvider,
{
    let payload = match store.modify(|c| c.begin_submit(now_ms()))? {
        Ok(payload) => payload,
        Err(rejection) => {
            log_refusal(rejection);
            return store.modify(|c| c.status);
        }
    };

    let outcome = provider.send(&payload).await;
    if let Err(err) = &outcome {
        log_delivery_failure(err);
    }
    store.modify(|c| c.finish_submit(&outcome, now_ms()))
}

/// Keep the current status up for its display window, then revert to idle.
///
/// Sleeps for whatever remains of the window and re-checks, so an early
/// wake or a clock that steps back only costs another sleep. Stops without
/// touching the state once a newer status has taken over the window or the
/// store is gone.
pub async fn hold_status<S, Sl, F>(store: &S, now_ms: impl Fn() -> u64, sleep: Sl)
where
    S: ContactStore,
    Sl: Fn(u64) -> F,
    F: Future<Output = ()>,
{
    let Some(Some(until)) = store.modify(|c| c.status_expires_at_ms()) else {
        return;
    };
    loop {
        sleep(until.saturating_sub(now_ms())).await;
        let cleared = store.modify(|c| {
            if c.status_expires_at_ms() != Some(until) {
                return true;
            }
            c.expire_status(now_ms())
        });
        if cleared != Some(false) {
            return;
        }
    }
}

fn log_refusal(rejection: SubmitRejection) {
    #[cfg(feature = "hydrate")]
    log::debug!("contact submission refused: {rejection}");
    #[cfg(not(feature = "hydrate"))]
    let _ = rejection;
}

fn log_delivery_failure(err: &RelayError) {
    #[cfg(feature = "hydrate")]
    log::warn!("contact message delivery failed: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
}
