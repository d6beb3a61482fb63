//! Backend response normalization, shared across all remote adapters.
//!
//! Remote services answer in one of three shapes: raw PDF bytes, a JSON
//! envelope carrying a base64 payload (top-level or nested one level), or a
//! JSON envelope carrying a follow-up URL that serves the bytes. Everything
//! else is a decline.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use super::BackendOutcome;

const PDF_DATA_URI_PREFIX: &str = "data:application/pdf;base64,";
/// Cap on response-body text quoted in decline reasons.
const BODY_SNIPPET_CHARS: usize = 200;

/// Turns a backend HTTP response into an outcome by sniffing its declared
/// content type. `client` is used for the one-shot follow-up fetch when the
/// payload points at a URL instead of carrying bytes.
pub async fn normalize_response(client: &Client, response: Response) -> BackendOutcome {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return BackendOutcome::Decline(format!("status {status}: {}", snippet(&body)));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.contains("application/pdf") {
        return match response.bytes().await {
            Ok(bytes) if !bytes.is_empty() => BackendOutcome::Success(bytes.to_vec()),
            Ok(_) => BackendOutcome::Decline("empty body with pdf content type".to_string()),
            Err(e) => BackendOutcome::Decline(format!("failed to read pdf body: {e}")),
        };
    }

    if content_type.contains("application/json") {
        let payload: Value = match response.json().await {
            Ok(value) => value,
            Err(e) => return BackendOutcome::Decline(format!("unparseable json payload: {e}")),
        };
        return normalize_json_payload(client, &payload).await;
    }

    BackendOutcome::Decline(format!("unsupported content type: {content_type:?}"))
}

/// Searches the JSON envelope in fixed order: `pdf`, `result.pdf`, `url`.
async fn normalize_json_payload(client: &Client, payload: &Value) -> BackendOutcome {
    if let Some(encoded) = payload.get("pdf").and_then(Value::as_str) {
        return decode_pdf_base64(encoded);
    }
    if let Some(encoded) = payload.pointer("/result/pdf").and_then(Value::as_str) {
        return decode_pdf_base64(encoded);
    }
    if let Some(url) = payload.get("url").and_then(Value::as_str) {
        debug!("Backend returned a follow-up URL, fetching");
        return fetch_followup(client, url).await;
    }
    BackendOutcome::Decline("json payload carries no pdf or url field".to_string())
}

/// Decodes a base64 PDF payload to raw bytes, stripping a data-URI prefix if
/// present. The decode is binary-exact: no re-encoding, no charset
/// interpretation, or the PDF is corrupted.
pub fn decode_pdf_base64(encoded: &str) -> BackendOutcome {
    let encoded = encoded.strip_prefix(PDF_DATA_URI_PREFIX).unwrap_or(encoded);
    match STANDARD.decode(encoded.trim()) {
        Ok(bytes) if !bytes.is_empty() => BackendOutcome::Success(bytes),
        Ok(_) => BackendOutcome::Decline("base64 payload decoded to zero bytes".to_string()),
        Err(e) => BackendOutcome::Decline(format!("invalid base64 payload: {e}")),
    }
}

/// One additional blocking fetch, bytes returned verbatim. No retry.
async fn fetch_followup(client: &Client, url: &str) -> BackendOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return BackendOutcome::Decline(format!("follow-up fetch failed: {e}")),
    };

    let status = response.status();
    if !status.is_success() {
        return BackendOutcome::Decline(format!("follow-up fetch returned status {status}"));
    }

    match response.bytes().await {
        Ok(bytes) if !bytes.is_empty() => BackendOutcome::Success(bytes.to_vec()),
        Ok(_) => BackendOutcome::Decline("follow-up fetch returned an empty body".to_string()),
        Err(e) => BackendOutcome::Decline(format!("failed to read follow-up body: {e}")),
    }
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
