//! Helpers the page sections lean on.
//!
//! `timeline` schedules cues from elapsed time; `sanitize` and `email` vet
//! contact input; `mailto` builds the resume-request link. `scroll` and
//! `clock` are the browser touch points and fall back to no-ops off wasm.

pub mod clock;
pub mod email;
pub mod mailto;
pub mod sanitize;
pub mod scroll;
pub mod timeline;
