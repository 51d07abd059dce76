//! Contact form submission to Formspree.
//!
//! The POST mirrors what the hosted form expects: multipart/form-data with
//! the visitor's name/email/message (plus an optional honeypot field), an
//! `Accept: application/json` header, and a JSON response body. The request
//! runs on a background thread and reports back over an mpsc channel so the
//! UI loop never blocks on the network.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

const FORMSPREE_BASE: &str = "https://formspree.io/f";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fields posted by the contact form.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
    /// When set, an empty `_gotcha` field is included for spam filtering.
    pub honeypot: bool,
}

/// Result of a submission attempt, delivered over the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure(String),
}

/// Build the submission endpoint for a Formspree form id.
pub fn endpoint(formspree_id: &str) -> String {
    format!("{FORMSPREE_BASE}/{formspree_id}")
}

/// Generate a boundary string unlikely to occur in user text.
fn generate_boundary() -> String {
    let state = RandomState::new();
    let mut hasher = state.build_hasher();
    hasher.write_u128(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
    );
    hasher.write_u32(std::process::id());
    format!("----termfolio{:016x}", hasher.finish())
}

/// Encode the fields as a multipart/form-data body with the given boundary.
pub fn encode_multipart(fields: &FormFields, boundary: &str) -> String {
    let mut body = String::new();
    let mut part = |name: &str, value: &str| {
        body.push_str("--");
        body.push_str(boundary);
        body.push_str("\r\n");
        body.push_str(&format!(
            "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
        ));
        body.push_str(value);
        body.push_str("\r\n");
    };

    part("name", &fields.name);
    part("email", &fields.email);
    part("message", &fields.message);
    if fields.honeypot {
        part("_gotcha", "");
    }

    body.push_str("--");
    body.push_str(boundary);
    body.push_str("--\r\n");
    body
}

/// Submit the form in the background; the outcome arrives on `tx`.
///
/// Network and protocol failures become `SubmitOutcome::Failure`; nothing
/// here panics or propagates.
pub fn submit(formspree_id: &str, fields: FormFields, tx: Sender<SubmitOutcome>) {
    let url = endpoint(formspree_id);

    thread::spawn(move || {
        let outcome = post_multipart(&url, &fields);
        // Receiver may be gone if the app quit mid-flight.
        let _ = tx.send(outcome);
    });
}

fn post_multipart(url: &str, fields: &FormFields) -> SubmitOutcome {
    let boundary = generate_boundary();
    let body = encode_multipart(fields, &boundary);

    let response = ureq::post(url)
        .set(
            "Content-Type",
            &format!("multipart/form-data; boundary={boundary}"),
        )
        .set("Accept", "application/json")
        .timeout(REQUEST_TIMEOUT)
        .send_bytes(body.as_bytes());

    match response {
        Ok(resp) => {
            // The endpoint answers JSON on success; a non-JSON body means
            // something upstream intercepted the request.
            let text = resp.into_string().unwrap_or_default();
            if serde_json::from_str::<serde_json::Value>(&text).is_ok() {
                tracing::info!("Contact form submitted");
                SubmitOutcome::Success
            } else {
                tracing::warn!("Contact form got a non-JSON response");
                SubmitOutcome::Failure("Unexpected response from form service".to_string())
            }
        }
        Err(e) => {
            tracing::warn!("Contact form submission failed: {}", e);
            SubmitOutcome::Failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        assert_eq!(endpoint("xwprojje"), "https://formspree.io/f/xwprojje");
    }

    #[test]
    fn test_multipart_contains_all_fields() {
        let fields = FormFields {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello there".to_string(),
            honeypot: true,
        };
        let body = encode_multipart(&fields, "----testboundary");

        assert!(body.contains("Content-Disposition: form-data; name=\"name\"\r\n\r\nJane\r\n"));
        assert!(body.contains("name=\"email\"\r\n\r\njane@example.com\r\n"));
        assert!(body.contains("name=\"message\"\r\n\r\nHello there\r\n"));
        assert!(body.contains("name=\"_gotcha\"\r\n\r\n\r\n"));
        assert!(body.ends_with("------testboundary--\r\n"));
    }

    #[test]
    fn test_multipart_omits_honeypot_when_disabled() {
        let fields = FormFields {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hi".to_string(),
            honeypot: false,
        };
        let body = encode_multipart(&fields, "----testboundary");
        assert!(!body.contains("_gotcha"));
    }

    #[test]
    fn test_boundary_delimits_every_part() {
        let fields = FormFields {
            name: "A".to_string(),
            email: "a@b.c".to_string(),
            message: "m".to_string(),
            honeypot: true,
        };
        let boundary = "----testboundary";
        let body = encode_multipart(&fields, boundary);

        // Four opening delimiters plus the closing one
        let delim = format!("--{boundary}\r\n");
        assert_eq!(body.matches(&delim).count(), 4);
        assert_eq!(body.matches(&format!("--{boundary}--")).count(), 1);
    }
}
