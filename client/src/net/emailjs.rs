//! Transactional email relay through the EmailJS REST API.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR) and native tests: sending is unavailable and reports
//! `RelayError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Every delivery failure (missing credentials, transport, provider
//! rejection) is a `RelayError`. Callers collapse it into the form's error
//! status; the detail is only for diagnostics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use std::future::Future;

use serde::Serialize;

use crate::state::contact::ContactForm;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("email relay not configured: {0} missing")]
    MissingConfig(&'static str),
    #[error("email relay transport error: {0}")]
    Transport(String),
    #[error("email provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("email relay is only available in the browser")]
    Unavailable,
}

/// Anything that can deliver one contact message.
pub trait MailProvider {
    fn send(&self, form: &ContactForm) -> impl Future<Output = Result<(), RelayError>>;
}

/// The three opaque identifiers EmailJS needs per send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl EmailJsConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
    /// `EMAILJS_PUBLIC_KEY` from the build environment.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::MissingConfig` naming the first absent value.
    pub fn from_build_env() -> Result<Self, RelayError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    /// # Errors
    ///
    /// Returns `RelayError::MissingConfig` for the first absent or blank value.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        Ok(Self {
            service_id: required(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: required(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: required(public_key, "EMAILJS_PUBLIC_KEY")?,
            endpoint: EMAILJS_SEND_URL.to_owned(),
        })
    }
}

fn required(value: Option<&str>, name: &'static str) -> Result<String, RelayError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or(RelayError::MissingConfig(name))
}

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactForm,
}

#[must_use]
pub fn build_send_request<'a>(config: &'a EmailJsConfig, form: &'a ContactForm) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: form,
    }
}

/// EmailJS-backed `MailProvider`.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: Result<EmailJsConfig, RelayError>,
}

impl EmailJsClient {
    #[must_use]
    pub fn new(config: Result<EmailJsConfig, RelayError>) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(EmailJsConfig::from_build_env())
    }
}

impl MailProvider for EmailJsClient {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let config = self.config.as_ref().map_err(Clone::clone)?;
        #[cfg(feature = "hydrate")]
        {
            let body = build_send_request(config, form);
            let resp = gloo_net::http::Request::post(&config.endpoint)
                .json(&body)
                .map_err(|e| RelayError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(RelayError::Rejected { status, body });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, form);
            Err(RelayError::Unavailable)
        }
    }
}
