//! Source Listing fallback — renders the literal LaTeX source as a monospaced
//! listing when every remote compile backend has declined.
//!
//! Split into a pure pagination step (fully testable) and a thin printpdf
//! writer. US-letter pages, fixed left margin and line height, fixed per-page
//! line capacity, long lines truncated with an ellipsis marker. The first
//! page opens with an advisory header so the reader knows this is not a
//! compiled resume.

use anyhow::Result;
use printpdf::{BuiltinFont, Mm, PdfDocument};

/// Listing lines longer than this are cut and marked with `...`.
pub const MAX_LINE_CHARS: usize = 80;
/// Lines per page, header included. 9pt Courier at the fixed line height
/// leaves slack above the bottom margin.
pub const LINES_PER_PAGE: usize = 56;

const HEADER_LINES: [&str; 3] = [
    "Automated LaTeX compilation was unavailable.",
    "The source below is preserved verbatim; compile it manually with pdflatex.",
    "",
];

/// Splits the source into pages of display lines. The advisory header
/// occupies the top of the first page; every line is truncated to
/// [`MAX_LINE_CHARS`].
pub fn paginate_source(tex: &str) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    let mut current: Vec<String> = HEADER_LINES.iter().map(|s| s.to_string()).collect();

    for line in tex.lines() {
        if current.len() >= LINES_PER_PAGE {
            pages.push(std::mem::take(&mut current));
        }
        current.push(truncate_line(line));
    }

    pages.push(current);
    pages
}

fn truncate_line(line: &str) -> String {
    if line.chars().count() > MAX_LINE_CHARS {
        let prefix: String = line.chars().take(MAX_LINE_CHARS).collect();
        format!("{prefix}...")
    } else {
        line.to_string()
    }
}

/// Renders the paginated listing to PDF bytes. Pure local computation; any
/// error here is caught by the pipeline and answered with the placeholder.
pub fn render_source_listing(tex: &str) -> Result<Vec<u8>> {
    let pages = paginate_source(tex);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Generated Resume (LaTeX Source)",
        Mm(215.9),
        Mm(279.4),
        "listing",
    );
    let font = doc.add_builtin_font(BuiltinFont::Courier)?;

    for (index, lines) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(215.9), Mm(279.4), "listing");
            doc.get_page(page).get_layer(layer)
        };

        // Top margin down, one fixed step per line.
        let mut y = 265.0;
        for line in lines {
            if !line.is_empty() {
                layer.use_text(line.clone(), 9.0, Mm(12.7), Mm(y), &font);
            }
            y -= 4.3;
        }
    }

    let bytes = doc.save_to_bytes()?;
    Ok(bytes)
}
