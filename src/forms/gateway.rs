use std::fmt;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config;
use crate::forms::validator::{FormFields, FormKind};

const CONTACT_DELAY_MS: u32 = 2_000;
const CALLBACK_DELAY_MS: u32 = 2_000;
const NEWSLETTER_DELAY_MS: u32 = 1_500;

/// Payload a production transport would POST to the forms endpoint.
#[derive(Serialize)]
struct SubmissionRequest<'a> {
    form: &'static str,
    fields: &'a FormFields,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionError {
    Rejected { reason: String },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Rejected { reason } => {
                write!(f, "Submission failed: {}. Please try again.", reason)
            }
        }
    }
}

/// Delivers one form submission. Today this only simulates the network
/// round-trip with a fixed delay; the serialized payload and target
/// endpoint are logged so the real transport can be dropped in without
/// touching the callers.
pub async fn submit(kind: FormKind, fields: &FormFields) -> Result<(), SubmissionError> {
    let request = SubmissionRequest {
        form: kind.as_str(),
        fields,
    };
    if let Ok(body) = serde_json::to_string(&request) {
        log!(format!(
            "simulating POST {}: {}",
            config::form_endpoint(kind.as_str()),
            body
        ));
    }

    TimeoutFuture::new(delay_for(kind)).await;
    Ok(())
}

fn delay_for(kind: FormKind) -> u32 {
    match kind {
        FormKind::Contact => CONTACT_DELAY_MS,
        FormKind::Callback => CALLBACK_DELAY_MS,
        FormKind::Newsletter => NEWSLETTER_DELAY_MS,
    }
}
