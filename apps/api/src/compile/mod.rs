//! PDF Compile Pipeline — turns a LaTeX document into PDF bytes with maximum
//! likelihood of success, degrading rather than failing.
//!
//! Order: remote backends (ytotech → latexonline → rtex), then a local
//! monospaced source-listing render, then a hand-assembled placeholder PDF.
//! Each stage either returns bytes (terminal — remaining stages never run)
//! or declines, advancing the pipeline. Stages run strictly sequentially,
//! once each, with no retries: network time is the cost and first success
//! wins. The pipeline as a whole cannot fail; the placeholder stage is pure
//! local byte assembly.

pub mod placeholder;
pub mod remote;
pub mod response;
pub mod source_listing;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::Config;
use self::remote::{LatexOnlineBackend, RtexBackend, YtotechBackend};

/// What a single compile stage produced.
#[derive(Debug)]
pub enum BackendOutcome {
    /// Compiled PDF bytes. Empty output is treated as a decline by the pipeline.
    Success(Vec<u8>),
    /// Non-fatal refusal, with a diagnostic reason for the logs.
    Decline(String),
}

/// One external rendering service integration. Each adapter owns its request
/// shape and leans on [`response::normalize_response`] for the response side.
#[async_trait]
pub trait CompileBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn compile(&self, tex: &str) -> BackendOutcome;
}

/// Ordered compile pipeline. Backends are data, not control flow: adding,
/// removing, or reordering them is a constructor change only.
pub struct CompilePipeline {
    backends: Vec<Box<dyn CompileBackend>>,
}

impl CompilePipeline {
    /// Builds the default pipeline from configured endpoints. The shared
    /// `client` carries the explicit per-call timeout.
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self::with_backends(vec![
            Box::new(YtotechBackend::new(
                client.clone(),
                config.ytotech_url.clone(),
            )),
            Box::new(LatexOnlineBackend::new(
                client.clone(),
                config.latexonline_url.clone(),
            )),
            Box::new(RtexBackend::new(client, config.rtex_url.clone())),
        ])
    }

    pub fn with_backends(backends: Vec<Box<dyn CompileBackend>>) -> Self {
        Self { backends }
    }

    pub fn backend_count(&self) -> usize {
        self.backends.len()
    }

    /// Compiles `tex` to PDF bytes. Always returns non-empty bytes: remote
    /// declines fall through to the local source listing, and a listing
    /// failure falls through to the fixed placeholder document.
    pub async fn compile(&self, tex: &str) -> Vec<u8> {
        for backend in &self.backends {
            match backend.compile(tex).await {
                BackendOutcome::Success(bytes) if !bytes.is_empty() => {
                    info!(
                        "Compile backend '{}' produced {} bytes",
                        backend.name(),
                        bytes.len()
                    );
                    return bytes;
                }
                BackendOutcome::Success(_) => {
                    warn!(
                        "Compile backend '{}' returned an empty document, skipping",
                        backend.name()
                    );
                }
                BackendOutcome::Decline(reason) => {
                    warn!("Compile backend '{}' declined: {}", backend.name(), reason);
                }
            }
        }

        match source_listing::render_source_listing(tex) {
            Ok(bytes) => {
                warn!("All remote compile backends declined; returning a source listing PDF");
                bytes
            }
            Err(e) => {
                warn!("Source listing render failed ({e}); returning the placeholder PDF");
                placeholder::minimal_placeholder_pdf()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use httpmock::prelude::*;

    const FAKE_PDF: &[u8] = b"%PDF-1.4 fake but binary \x00\x01\x02";

    /// Pipeline with all three backends pointed at the mock server.
    fn pipeline_for(server: &MockServer) -> CompilePipeline {
        let client = reqwest::Client::new();
        CompilePipeline::with_backends(vec![
            Box::new(remote::YtotechBackend::new(
                client.clone(),
                server.url("/builds/sync"),
            )),
            Box::new(remote::LatexOnlineBackend::new(
                client.clone(),
                server.url("/compile"),
            )),
            Box::new(remote::RtexBackend::new(client, server.url("/api/v2"))),
        ])
    }

    #[tokio::test]
    async fn test_binary_response_short_circuits_later_backends() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });
        let second = server.mock(|when, then| {
            when.method(GET).path("/compile");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });
        let third = server.mock(|when, then| {
            when.method(POST).path("/api/v2");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });

        let pdf = pipeline_for(&server).compile("\\documentclass{article}").await;

        assert_eq!(pdf, FAKE_PDF);
        first.assert();
        assert_eq!(second.hits(), 0, "chain must short-circuit on first success");
        assert_eq!(third.hits(), 0, "chain must short-circuit on first success");
    }

    #[tokio::test]
    async fn test_base64_json_payload_round_trips_exactly() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "pdf": STANDARD.encode(FAKE_PDF) }));
        });

        let pdf = pipeline_for(&server).compile("\\documentclass{article}").await;

        assert_eq!(pdf, FAKE_PDF, "decoded bytes must equal the encoded input");
    }

    #[tokio::test]
    async fn test_nested_result_pdf_payload_is_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(
                    serde_json::json!({ "result": { "pdf": STANDARD.encode(FAKE_PDF) } }),
                );
        });

        let pdf = pipeline_for(&server).compile("\\documentclass{article}").await;

        assert_eq!(pdf, FAKE_PDF);
    }

    #[tokio::test]
    async fn test_followup_url_payload_is_fetched_once() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "url": server.url("/artifacts/out.pdf") }));
        });
        let artifact = server.mock(|when, then| {
            when.method(GET).path("/artifacts/out.pdf");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });

        let pdf = pipeline_for(&server).compile("\\documentclass{article}").await;

        assert_eq!(pdf, FAKE_PDF);
        artifact.assert();
    }

    #[tokio::test]
    async fn test_oversized_query_skips_latexonline_without_network_call() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(500).body("compiler exploded");
        });
        let skipped = server.mock(|when, then| {
            when.method(GET).path("/compile");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });
        let last = server.mock(|when, then| {
            when.method(POST).path("/api/v2");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });

        // Far beyond the encoded-URL safety limit once percent-encoded.
        let tex = format!("\\documentclass{{article}}\n{}", "x ".repeat(8000));
        let pdf = pipeline_for(&server).compile(&tex).await;

        assert_eq!(pdf, FAKE_PDF);
        assert_eq!(skipped.hits(), 0, "oversized query must never hit the network");
        last.assert();
    }

    #[tokio::test]
    async fn test_all_remote_declines_fall_back_to_source_listing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(500).body("no");
        });
        server.mock(|when, then| {
            when.method(GET).path("/compile");
            then.status(404).body("no");
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/v2");
            then.status(503).body("no");
        });

        let tex = "\\documentclass{article}\n\\begin{document}\nhi\n\\end{document}";
        let pdf = pipeline_for(&server).compile(tex).await;

        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF"), "fallback must still be a PDF");
        assert_ne!(
            pdf,
            placeholder::minimal_placeholder_pdf(),
            "source listing, not the last-resort placeholder"
        );
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_a_decline() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/builds/sync");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>a login page</html>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/compile");
            then.status(500).body("no");
        });
        let last = server.mock(|when, then| {
            when.method(POST).path("/api/v2");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(FAKE_PDF);
        });

        let pdf = pipeline_for(&server).compile("\\documentclass{article}").await;

        assert_eq!(pdf, FAKE_PDF);
        last.assert();
    }

    /// A stage that "succeeds" with zero bytes must advance the pipeline.
    struct EmptySuccessBackend;

    #[async_trait]
    impl CompileBackend for EmptySuccessBackend {
        fn name(&self) -> &'static str {
            "empty"
        }

        async fn compile(&self, _tex: &str) -> BackendOutcome {
            BackendOutcome::Success(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_empty_success_advances_to_fallback() {
        let pipeline = CompilePipeline::with_backends(vec![Box::new(EmptySuccessBackend)]);
        let pdf = pipeline.compile("\\documentclass{article}").await;
        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_pipeline_with_no_backends_still_returns_bytes() {
        let pipeline = CompilePipeline::with_backends(vec![]);
        let pdf = pipeline.compile("").await;
        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF"));
    }
}
