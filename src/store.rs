//! Post store
//!
//! An append-only collection of blog posts persisted as one pretty-printed
//! JSON array. The append path writes to a temporary sibling file and renames
//! it over the target, so a failed run can never leave a truncated or
//! half-written store behind: readers see either the old contents or the new
//! contents, nothing in between.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A persisted blog post
///
/// Never mutated after append; the store has no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Time-derived sortable key, unique within the store
    pub id: String,
    /// Post title
    pub title: String,
    /// HTML body (everything after the title marker)
    pub content: String,
    /// Plain-text preview derived from the body's first paragraph
    pub teaser: String,
    /// Creation instant, ISO-8601
    pub date: String,
    /// Image URL, or the absence marker when lookup found nothing
    pub image: String,
}

/// File-backed post store
pub struct PostStore {
    path: PathBuf,
}

impl PostStore {
    /// Create a store handle for the given file path. The file is not
    /// touched until `load` or `append` is called.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all posts in insertion order
    ///
    /// An absent file is an empty store. A present-but-unparseable file is
    /// fatal: prior posts must never be silently discarded.
    ///
    /// # Errors
    /// * `StoreError::Io` - the file exists but could not be read
    /// * `StoreError::Corrupt` - the file exists but is not valid JSON
    pub fn load(&self) -> Result<Vec<PostRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(StoreError::Corrupt)
    }

    /// Append one post, preserving all existing posts
    ///
    /// The new collection is serialized to a temporary file next to the
    /// store and atomically renamed over it. If any step fails, the prior
    /// store contents remain intact.
    ///
    /// # Errors
    /// * `StoreError::Corrupt` - the existing store failed to parse; it is
    ///   left untouched
    /// * `StoreError::Serialize` - the collection could not be serialized
    /// * `StoreError::Io` - writing or renaming the temporary file failed
    pub fn append(&self, record: PostRecord) -> Result<(), StoreError> {
        let mut posts = self.load()?;
        posts.push(record);

        let json = serde_json::to_string_pretty(&posts).map_err(StoreError::Serialize)?;

        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io(e));
        }

        tracing::info!(
            path = %self.path.display(),
            total_posts = posts.len(),
            "Blog post saved to store"
        );

        Ok(())
    }
}
