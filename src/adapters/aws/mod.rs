//! Shared plumbing for the AWS service adapters.

mod credentials;
mod sigv4;

pub use credentials::AwsCredentials;
pub use sigv4::RequestSigner;

use reqwest::blocking::RequestBuilder;

/// Attach signer output to an outgoing request.
pub(crate) fn with_signed_headers(
    mut builder: RequestBuilder,
    headers: Vec<(String, String)>,
) -> RequestBuilder {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

/// Pull a human-readable message out of an AWS error body.
///
/// Query APIs answer `{"Error":{"Message":..}}`, REST JSON APIs `{"message":..}`.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("Error")
        .and_then(|error| error.get("Message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed
        .get("message")
        .or_else(|| parsed.get("Message"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}
