//! Remote compile backends — one adapter per external LaTeX rendering service.
//!
//! Each adapter is self-contained: it composes its own request shape around
//! the inline document (never a file reference) and hands the response to the
//! shared normalization in [`super::response`]. A failed or refused request
//! is a decline, never an error; the pipeline owns the fallback behavior.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::json;

use super::response::normalize_response;
use super::{BackendOutcome, CompileBackend};

// ────────────────────────────────────────────────────────────────────────────
// ytotech — POST JSON { compiler, resources }
// ────────────────────────────────────────────────────────────────────────────

pub struct YtotechBackend {
    client: Client,
    endpoint: String,
}

impl YtotechBackend {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl CompileBackend for YtotechBackend {
    fn name(&self) -> &'static str {
        "ytotech"
    }

    async fn compile(&self, tex: &str) -> BackendOutcome {
        let body = json!({
            "compiler": "pdflatex",
            "resources": [{ "file": "main.tex", "content": tex }],
        });

        let response = match self.client.post(&self.endpoint).json(&body).send().await {
            Ok(response) => response,
            Err(e) => return BackendOutcome::Decline(format!("request failed: {e}")),
        };

        normalize_response(&self.client, response).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// latexonline — GET with the document in a query parameter
// ────────────────────────────────────────────────────────────────────────────

/// Longest URL (endpoint plus URL-encoded document) this backend will send.
/// Longer requests are guaranteed rejections against servers with strict
/// URL-length limits, so the backend declines without a network call.
pub const MAX_ENCODED_URL_LEN: usize = 8000;

pub struct LatexOnlineBackend {
    client: Client,
    endpoint: String,
}

impl LatexOnlineBackend {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl CompileBackend for LatexOnlineBackend {
    fn name(&self) -> &'static str {
        "latexonline"
    }

    async fn compile(&self, tex: &str) -> BackendOutcome {
        let url = match Url::parse_with_params(&self.endpoint, [("text", tex)]) {
            Ok(url) => url,
            Err(e) => return BackendOutcome::Decline(format!("invalid endpoint URL: {e}")),
        };

        let encoded_len = url.as_str().len();
        if encoded_len >= MAX_ENCODED_URL_LEN {
            return BackendOutcome::Decline(format!(
                "encoded document is {encoded_len} chars, over the {MAX_ENCODED_URL_LEN} URL limit"
            ));
        }

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return BackendOutcome::Decline(format!("request failed: {e}")),
        };

        normalize_response(&self.client, response).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// rtex — POST JSON { code, format }
// ────────────────────────────────────────────────────────────────────────────

pub struct RtexBackend {
    client: Client,
    endpoint: String,
}

impl RtexBackend {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl CompileBackend for RtexBackend {
    fn name(&self) -> &'static str {
        "rtex"
    }

    async fn compile(&self, tex: &str) -> BackendOutcome {
        let body = json!({ "code": tex, "format": "pdf" });

        let response = match self.client.post(&self.endpoint).json(&body).send().await {
            Ok(response) => response,
            Err(e) => return BackendOutcome::Decline(format!("request failed: {e}")),
        };

        normalize_response(&self.client, response).await
    }
}
