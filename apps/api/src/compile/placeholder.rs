//! Minimal placeholder PDF — the pipeline's last resort.
//!
//! Hand-assembled from a fixed object skeleton: catalog, page tree, one
//! US-letter page, one content stream, one Type1 Helvetica font. Object
//! byte offsets are recorded while writing so the xref table and trailer
//! are exact and any standard viewer opens the file. The content is a
//! short fixed diagnostic message only; the LaTeX source is intentionally
//! not embedded here (the source listing stage covers that).

const DIAGNOSTIC_LINE_1: &str = "LaTeX compilation failed.";
const DIAGNOSTIC_LINE_2: &str = "Please compile the source manually with pdflatex.";

/// Assembles the placeholder document. Pure byte construction; cannot fail.
pub fn minimal_placeholder_pdf() -> Vec<u8> {
    let content_stream = format!(
        "BT\n/F1 12 Tf\n72 720 Td\n({DIAGNOSTIC_LINE_1}) Tj\n0 -20 Td\n({DIAGNOSTIC_LINE_2}) Tj\nET\n"
    );

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content_stream.len(),
            content_stream
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
    }

    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }

    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).to_string()
    }

    #[test]
    fn test_has_pdf_header_and_eof() {
        let pdf = minimal_placeholder_pdf();
        assert!(pdf.starts_with(b"%PDF-1.4"));
        assert!(as_text(&pdf).trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_xref_offsets_point_at_their_objects() {
        let pdf = minimal_placeholder_pdf();
        let text = as_text(&pdf);

        let xref_start = text.find("xref\n").expect("xref table present");
        let after_header = &text[xref_start..];
        let entries: Vec<&str> = after_header
            .lines()
            .skip(3) // "xref", "0 6", free entry
            .take(5)
            .collect();
        assert_eq!(entries.len(), 5);

        for (index, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().expect("10-digit offset");
            let expected = format!("{} 0 obj", index + 1);
            assert!(
                text[offset..].starts_with(&expected),
                "offset {offset} should point at '{expected}'"
            );
        }
    }

    #[test]
    fn test_startxref_points_at_the_xref_table() {
        let pdf = minimal_placeholder_pdf();
        let text = as_text(&pdf);

        let startxref = text.find("startxref\n").expect("startxref present");
        let offset: usize = text[startxref + "startxref\n".len()..]
            .lines()
            .next()
            .unwrap()
            .trim()
            .parse()
            .expect("numeric startxref");
        assert!(text[offset..].starts_with("xref"));
    }

    #[test]
    fn test_content_stream_length_is_exact() {
        let pdf = minimal_placeholder_pdf();
        let text = as_text(&pdf);

        let length: usize = {
            let tag = "<< /Length ";
            let at = text.find(tag).expect("length entry") + tag.len();
            text[at..].split_whitespace().next().unwrap().parse().unwrap()
        };

        let stream_start = text.find("stream\n").expect("stream keyword") + "stream\n".len();
        let stream_end = text.find("endstream").expect("endstream keyword");
        assert_eq!(stream_end - stream_start, length);
    }

    #[test]
    fn test_carries_only_the_fixed_diagnostic() {
        let pdf = minimal_placeholder_pdf();
        let text = as_text(&pdf);
        assert!(text.contains(DIAGNOSTIC_LINE_1));
        assert!(text.contains(DIAGNOSTIC_LINE_2));
        assert!(!text.contains("\\documentclass"));
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(minimal_placeholder_pdf(), minimal_placeholder_pdf());
    }
}
