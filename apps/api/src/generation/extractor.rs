//! Response Extractor — splits the raw LLM output into an explanation and a
//! LaTeX document, then normalizes the document for compilation.
//!
//! The model is instructed to follow the EXPLANATION / LATEX_CONTENT format,
//! but that contract is advisory. Missing sentinels and stray markdown are
//! tolerated silently: a possibly-incomplete document is still worth handing
//! to the compile pipeline, which has its own fallbacks.

/// Sentinel marking the start of the LaTeX document section.
pub const LATEX_SENTINEL: &str = "LATEX_CONTENT:";
/// Label prefixing the explanation section.
pub const EXPLANATION_PREFIX: &str = "EXPLANATION:";
/// Explanation used when the model did not follow the output format.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided by AI";

const DOC_START: &str = "\\documentclass";
const DOC_END: &str = "\\end{document}";

/// Splits the full LLM response into `(explanation, cleaned tex source)`.
///
/// The split requires exactly one occurrence of the sentinel. Zero or
/// multiple occurrences fall back to treating the entire response as the
/// document with the default explanation.
pub fn split_response(full: &str) -> (String, String) {
    let parts: Vec<&str> = full.splitn(3, LATEX_SENTINEL).collect();

    if parts.len() == 2 {
        let head = parts[0].trim();
        let explanation = head
            .strip_prefix(EXPLANATION_PREFIX)
            .unwrap_or(head)
            .trim()
            .to_string();
        (explanation, clean_tex_source(parts[1]))
    } else {
        (DEFAULT_EXPLANATION.to_string(), clean_tex_source(full))
    }
}

/// Normalizes raw LaTeX output for compilation, in order:
/// 1. remove all triple-backtick code fences (with or without a language tag),
/// 2. discard everything before the first `\documentclass`,
/// 3. discard everything after the last `\end{document}`.
///
/// No validation beyond string search: if the markers are absent the text is
/// passed through as-is. Running this twice yields the identical string.
pub fn clean_tex_source(raw: &str) -> String {
    let mut cleaned = raw
        .replace("```latex", "")
        .replace("```tex", "")
        .replace("```", "");

    if let Some(start) = cleaned.find(DOC_START) {
        if start > 0 {
            cleaned = cleaned[start..].to_string();
        }
    }

    if let Some(end) = cleaned.rfind(DOC_END) {
        if end > 0 {
            cleaned.truncate(end + DOC_END.len());
        }
    }

    cleaned.trim().to_string()
}
