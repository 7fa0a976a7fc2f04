//! Outbound network calls made from the browser.

pub mod emailjs;
