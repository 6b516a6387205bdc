//! Content extraction parser
//!
//! Decomposes the final stage's raw marked-up text into a title, body, and
//! teaser. The generator is non-deterministic, so its output can be
//! malformed in every way imaginable; this parser is total over such input
//! and reports a typed `ExtractionError` instead of panicking.
//!
//! Marker matching is first-occurrence, case-sensitive, and non-overlapping.
//! Nested or malformed markup beyond the first title and paragraph pair is
//! passed through untouched inside the body.

use crate::error::ExtractionError;

const H1_OPEN: &str = "<h1>";
const H1_CLOSE: &str = "</h1>";
const P_OPEN: &str = "<p>";
const P_CLOSE: &str = "</p>";

/// Structured content extracted from the raw text blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Post title (trimmed, non-empty, free of the title markers)
    pub title: String,
    /// Everything after the closing title marker, trimmed
    pub body: String,
    /// Text of the body's first paragraph with the paragraph markers stripped
    pub teaser: String,
}

/// Extract title, body, and teaser from the raw text blob
///
/// # Errors
/// * `ExtractionError::MissingTitleMarker` - no `<h1>`/`</h1>` pair
/// * `ExtractionError::EmptyTitle` - the title trims to nothing
/// * `ExtractionError::EmptyBody` - nothing follows the title
/// * `ExtractionError::MissingTeaserParagraph` - the body has no `<p>`/`</p>` pair
pub fn extract(raw_text: &str) -> Result<ExtractedContent, ExtractionError> {
    let title_open = raw_text
        .find(H1_OPEN)
        .ok_or(ExtractionError::MissingTitleMarker)?;
    let title_start = title_open + H1_OPEN.len();
    let title_len = raw_text[title_start..]
        .find(H1_CLOSE)
        .ok_or(ExtractionError::MissingTitleMarker)?;

    let title = raw_text[title_start..title_start + title_len].trim();
    if title.is_empty() {
        return Err(ExtractionError::EmptyTitle);
    }

    let body = raw_text[title_start + title_len + H1_CLOSE.len()..].trim();
    if body.is_empty() {
        return Err(ExtractionError::EmptyBody);
    }

    let teaser_open = body
        .find(P_OPEN)
        .ok_or(ExtractionError::MissingTeaserParagraph)?;
    let teaser_start = teaser_open + P_OPEN.len();
    let teaser_len = body[teaser_start..]
        .find(P_CLOSE)
        .ok_or(ExtractionError::MissingTeaserParagraph)?;

    // Only the paragraph markers are stripped; inline markup stays.
    let teaser = body[teaser_start..teaser_start + teaser_len].trim();

    Ok(ExtractedContent {
        title: title.to_string(),
        body: body.to_string(),
        teaser: teaser.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_well_formed() {
        let raw = "<h1>AI Breakthrough</h1><p>Teaser text.</p><p>More body.</p>";
        let content = extract(raw).unwrap();
        assert_eq!(content.title, "AI Breakthrough");
        assert_eq!(content.teaser, "Teaser text.");
        assert_eq!(content.body, "<p>Teaser text.</p><p>More body.</p>");
    }

    #[test]
    fn test_extract_trims_whitespace_around_title_and_body() {
        let raw = "  <h1>  Spaced Title  </h1>\n\n  <p>Lead.</p> trailing  ";
        let content = extract(raw).unwrap();
        assert_eq!(content.title, "Spaced Title");
        assert_eq!(content.body, "<p>Lead.</p> trailing");
        assert_eq!(content.teaser, "Lead.");
    }

    #[test]
    fn test_extract_keeps_inline_markup_in_teaser() {
        let raw = "<h1>T</h1><p>A <strong>bold</strong> claim.</p>";
        let content = extract(raw).unwrap();
        assert_eq!(content.teaser, "A <strong>bold</strong> claim.");
    }

    #[test]
    fn test_extract_uses_first_marker_pairs_only() {
        let raw = "<h1>First</h1><p>one</p><h1>Second</h1><p>two</p>";
        let content = extract(raw).unwrap();
        assert_eq!(content.title, "First");
        assert_eq!(content.teaser, "one");
        // The second h1 pair is body content, untouched.
        assert!(content.body.contains("<h1>Second</h1>"));
    }

    #[test]
    fn test_extract_missing_open_marker() {
        let raw = "No heading here</h1><p>text</p>";
        assert_eq!(extract(raw), Err(ExtractionError::MissingTitleMarker));
    }

    #[test]
    fn test_extract_missing_close_marker() {
        let raw = "<h1>Unclosed title<p>text</p>";
        assert_eq!(extract(raw), Err(ExtractionError::MissingTitleMarker));
    }

    #[test]
    fn test_extract_uppercase_markers_do_not_match() {
        let raw = "<H1>Title</H1><p>text</p>";
        assert_eq!(extract(raw), Err(ExtractionError::MissingTitleMarker));
    }

    #[test]
    fn test_extract_whitespace_only_title() {
        let raw = "<h1>   \n </h1><p>text</p>";
        assert_eq!(extract(raw), Err(ExtractionError::EmptyTitle));
    }

    #[test]
    fn test_extract_empty_body() {
        let raw = "<h1>Title</h1>   \n  ";
        assert_eq!(extract(raw), Err(ExtractionError::EmptyBody));
    }

    #[test]
    fn test_extract_body_without_paragraph() {
        let raw = "<h1>Title</h1><div>no paragraphs here</div>";
        assert_eq!(extract(raw), Err(ExtractionError::MissingTeaserParagraph));
    }

    #[test]
    fn test_extract_unclosed_paragraph() {
        let raw = "<h1>Title</h1><p>never closed";
        assert_eq!(extract(raw), Err(ExtractionError::MissingTeaserParagraph));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let raw = "<h1>Stable</h1><p>Same every time.</p><p>Rest.</p>";
        let first = extract(raw).unwrap();
        let second = extract(raw).unwrap();
        assert_eq!(first, second);
    }
}
