use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;
use crate::inquiry::flow::InquiryPayload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend answered with a list of problems.
    #[error("{0}")]
    Rejected(String),
    #[error("Submission failed. Please try again.")]
    Unstructured,
    #[error("Network error. Please check your connection.")]
    Network,
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

/// Map an HTTP reply to the submission outcome.
pub fn interpret_reply(ok: bool, body: &str) -> Result<(), SubmitError> {
    if ok {
        return Ok(());
    }
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return Err(SubmitError::Unstructured);
    };
    let messages: Vec<String> = parsed
        .errors
        .into_iter()
        .filter_map(|e| e.message)
        .filter(|m| !m.is_empty())
        .collect();
    if messages.is_empty() {
        Err(SubmitError::Unstructured)
    } else {
        Err(SubmitError::Rejected(messages.join(", ")))
    }
}

/// Receiver of finished inquiries.
pub(crate) trait InquiryEndpoint {
    async fn deliver(&self, payload: InquiryPayload) -> Result<(), SubmitError>;
}

/// Third-party form backend taking multipart posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEndpoint {
    url: String,
}

impl FormEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::inquiry_endpoint())
    }
}

impl InquiryEndpoint for FormEndpoint {
    async fn deliver(&self, payload: InquiryPayload) -> Result<(), SubmitError> {
        let form = form_data(&payload).map_err(form_build_failed)?;

        let response = Request::post(&self.url)
            .header("Accept", "application/json")
            .body(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Inquiry request failed: {}", e);
                SubmitError::Network
            })?;

        if response.ok() {
            info!("Inquiry accepted with status {}", response.status());
            return Ok(());
        }

        warn!("Inquiry rejected with status {}", response.status());
        let body = response.text().await.unwrap_or_default();
        interpret_reply(false, &body)
    }
}

/// Building the form is a local failure; it says nothing about the network.
fn form_build_failed(detail: impl std::fmt::Debug) -> SubmitError {
    warn!("Could not build inquiry form data: {:?}", detail);
    SubmitError::Unstructured
}

fn form_data(payload: &InquiryPayload) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for (key, value) in &payload.fields {
        form.append_with_str(key, value)?;
    }
    if let Some(file) = &payload.attachment {
        form.append_with_blob_and_filename("attachment", file, &file.name())?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_reply_ignores_body() {
        assert_eq!(interpret_reply(true, "not json"), Ok(()));
    }

    #[test]
    fn single_message_passes_through() {
        let body = r#"{"errors":[{"message":"Email invalid"}]}"#;
        assert_eq!(
            interpret_reply(false, body).map_err(|e| e.to_string()),
            Err("Email invalid".to_string())
        );
    }

    #[test]
    fn extra_error_fields_are_tolerated() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"}],"ok":false}"#;
        assert_eq!(
            interpret_reply(false, body),
            Err(SubmitError::Rejected("should be an email".into()))
        );
    }

    #[test]
    fn empty_or_missing_list_is_unstructured() {
        for body in ["", "{}", r#"{"errors":[]}"#, r#"{"errors":[{"code":"X"}]}"#, r#"{"error":"nope"}"#] {
            assert_eq!(interpret_reply(false, body), Err(SubmitError::Unstructured), "{body}");
        }
    }

    #[test]
    fn form_build_failure_is_not_a_network_error() {
        let err = form_build_failed("FormData constructor threw");
        assert_eq!(err, SubmitError::Unstructured);
        assert_ne!(err, SubmitError::Network);
    }

    #[test]
    fn messages_are_distinct_per_kind() {
        assert_ne!(SubmitError::Network.to_string(), SubmitError::Unstructured.to_string());
        assert_eq!(
            SubmitError::Network.to_string(),
            "Network error. Please check your connection."
        );
    }

    #[test]
    fn endpoint_keeps_its_url() {
        assert_eq!(FormEndpoint::new("https://example.test/f/1").url, "https://example.test/f/1");
    }
}
