//! Error types for the blog generation pipeline
//!
//! Every failure a run can hit is represented here as a typed variant, so the
//! caller can tell exactly which phase failed (a stage, extraction, or
//! persistence) and why. Image lookup failures are deliberately absent from
//! `PipelineError`: they degrade the post instead of aborting the run.

use thiserror::Error;

/// Why a pipeline stage failed after exhausting its retries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageCause {
    /// The attempt exceeded the stage's per-attempt timeout
    Timeout,
    /// The generation service could not be reached or returned a bad response
    Transport,
    /// The generation service rejected the request with a rate limit
    RateLimited,
    /// The generation service returned empty (or whitespace-only) text
    EmptyOutput,
}

impl std::fmt::Display for StageCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageCause::Timeout => write!(f, "timeout"),
            StageCause::Transport => write!(f, "transport error"),
            StageCause::RateLimited => write!(f, "rate limited"),
            StageCause::EmptyOutput => write!(f, "empty output"),
        }
    }
}

/// Terminal failure of a pipeline run
///
/// Exactly one of these is reported per failed run; no partial post is ever
/// written to the store when any variant is returned.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stage exhausted its retry budget; no later stage was executed
    #[error("stage '{stage}' failed after {attempts} attempt(s): {cause}")]
    Stage {
        /// Name of the stage that failed
        stage: &'static str,
        /// Final failure cause (the last attempt's outcome)
        cause: StageCause,
        /// Number of attempts made before giving up
        attempts: u32,
    },

    /// The final stage's output could not be decomposed into a post
    #[error("content extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// The post store could not be read or atomically replaced
    #[error("post store error: {0}")]
    Store(#[from] StoreError),
}

/// Failure kinds of the content extraction parser
///
/// The parser is total: malformed generator output maps onto one of these
/// variants rather than panicking.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    /// No `<h1>`/`</h1>` marker pair was found
    #[error("no <h1>...</h1> title marker pair in generated output")]
    MissingTitleMarker,
    /// The text between the title markers is empty after trimming
    #[error("title between <h1> markers is empty")]
    EmptyTitle,
    /// Nothing remains after the closing title marker
    #[error("no body content after the title")]
    EmptyBody,
    /// The body contains no `<p>`/`</p>` pair to derive a teaser from
    #[error("body contains no <p>...</p> paragraph for the teaser")]
    MissingTeaserParagraph,
}

/// Post store failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// The existing store file is present but not valid JSON. The file is
    /// left untouched; appending over it would silently discard prior posts.
    #[error("existing store file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The in-memory post collection could not be serialized
    #[error("failed to serialize posts: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading, writing, or replacing the store file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by the generation client for a single attempt
///
/// Timeouts are not represented here; the orchestrator bounds each attempt
/// with its own timer and attributes elapsed attempts itself.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// HTTP send/read/parse failure or an unexpected status code
    #[error("generation transport error: {0}")]
    Transport(String),
    /// The service returned HTTP 429
    #[error("generation service rate limit exceeded")]
    RateLimited,
    /// The response carried no usable text
    #[error("generation service returned no text")]
    Empty,
}

impl GenerationError {
    /// Map a client-level failure onto the stage-level cause reported to the
    /// caller after retries are exhausted.
    pub fn stage_cause(&self) -> StageCause {
        match self {
            GenerationError::Transport(_) => StageCause::Transport,
            GenerationError::RateLimited => StageCause::RateLimited,
            GenerationError::Empty => StageCause::EmptyOutput,
        }
    }
}

/// Image lookup failures (non-fatal, degrade to an absence marker)
#[derive(Error, Debug)]
pub enum ImageLookupError {
    /// HTTP send/read/parse failure
    #[error("image lookup transport error: {0}")]
    Transport(String),
    /// The image service returned an unexpected status code
    #[error("image service returned status {0}")]
    BadStatus(u16),
    /// The lookup exceeded its fixed timeout
    #[error("image lookup timed out")]
    Timeout,
}
