//! Contact Relay Command
//!
//! Posts the contact form to the third-party form relay.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{FormData, HtmlFormElement};

use crate::error::{SubmitError, UNKNOWN_REJECTION};

/// Relay response body. Only `message` is read; it explains rejections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Success is decided by the HTTP status alone
pub fn classify_response(status: u16, body: RelayResponse) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status,
            message: body.message.unwrap_or_else(|| UNKNOWN_REJECTION.to_string()),
        })
    }
}

/// Send every field of `form` to `endpoint` in a single POST
pub async fn submit_contact_form(endpoint: &str, form: &HtmlFormElement) -> Result<(), SubmitError> {
    let data = FormData::new_with_form(form)
        .map_err(|e| SubmitError::Network(format!("form data unavailable: {:?}", e)))?;

    let response = Request::post(endpoint)
        .body(data)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    let body: RelayResponse = response
        .json()
        .await
        .map_err(|e| SubmitError::Decode(e.to_string()))?;

    log::debug!("[CONTACT] relay answered {} {:?}", status, body);
    classify_response(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RelayResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ok_with_empty_body_is_success() {
        assert_eq!(classify_response(200, parse("{}")), Ok(()));
    }

    #[test]
    fn test_bad_request_surfaces_relay_message() {
        let err = classify_response(400, parse(r#"{"message":"Invalid email"}"#)).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected { status: 400, message: "Invalid email".to_string() }
        );
        assert!(err.user_message().contains("Invalid email"));
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let err = classify_response(500, parse(r#"{"success":false}"#)).unwrap_err();
        assert_eq!(err.user_message(), format!("Error: {}", UNKNOWN_REJECTION));
    }

    #[test]
    fn test_extra_relay_fields_are_ignored() {
        let body = parse(r#"{"success":true,"message":"Email sent","data":{"id":1}}"#);
        assert_eq!(body.message.as_deref(), Some("Email sent"));
        assert_eq!(classify_response(200, body), Ok(()));
    }
}
