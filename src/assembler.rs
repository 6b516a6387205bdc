//! Post assembler
//!
//! Combines extracted content with a time-derived id, a creation timestamp,
//! and a looked-up illustrative image into a complete `PostRecord`. Image
//! lookup is best-effort: a miss or an error degrades to an absence marker
//! and never aborts post creation.

use crate::extract::ExtractedContent;
use crate::images::ImageLookup;
use crate::store::PostRecord;
use chrono::Utc;

/// Value stored in `PostRecord::image` when no image could be found
pub const NO_IMAGE_MARKER: &str = "No image found for the given query.";

/// Build a complete post record from extracted content
///
/// The extracted title doubles as the image search query. The id is the
/// current UTC instant at second granularity, rendered as a sortable text
/// key; the date is the full RFC 3339 instant.
pub async fn assemble(content: ExtractedContent, lookup: &dyn ImageLookup) -> PostRecord {
    let image = match lookup.lookup(&content.title).await {
        Ok(Some(url)) => url,
        Ok(None) => {
            tracing::warn!(query = %content.title, "No image found for post");
            NO_IMAGE_MARKER.to_string()
        }
        Err(e) => {
            tracing::warn!(query = %content.title, error = %e, "Image lookup failed");
            NO_IMAGE_MARKER.to_string()
        }
    };

    let now = Utc::now();
    PostRecord {
        id: now.format("%Y%m%d%H%M%S").to_string(),
        title: content.title,
        content: content.body,
        teaser: content.teaser,
        date: now.to_rfc3339(),
        image,
    }
}
