//! Blogsmith
//!
//! Generates a blog post by running a fixed sequence of role-specialized
//! generation stages (research, writing, editing, formatting, publishing),
//! decomposing the final stage's marked-up output into a title, teaser, and
//! body, enriching it with a looked-up image, and appending the result to a
//! durable JSON post store.
//!
//! This library exposes modules for testing and external use. The main
//! binary is in `src/main.rs`.

pub mod assembler;
pub mod config;
pub mod error;
pub mod extract;
pub mod generation;
pub mod images;
pub mod pipeline;
pub mod store;

use error::PipelineError;
use generation::TextGenerator;
use images::ImageLookup;
use pipeline::StageSpec;
use store::{PostRecord, PostStore};

/// Run one complete pipeline: stages, extraction, assembly, and persistence
///
/// At most one post is produced per run. Nothing is written to the store
/// unless every earlier phase succeeded, so a failed run leaves the store
/// exactly as it was.
///
/// # Errors
/// * `PipelineError::Stage` - a stage exhausted its retries; no later stage ran
/// * `PipelineError::Extraction` - the final output had no usable structure
/// * `PipelineError::Store` - the store was corrupt or could not be replaced
pub async fn generate_blog_post(
    generator: &dyn TextGenerator,
    stages: &[StageSpec],
    lookup: &dyn ImageLookup,
    store: &PostStore,
    temperature: f32,
) -> Result<PostRecord, PipelineError> {
    let raw_text = pipeline::run_pipeline(generator, stages, temperature).await?;
    let content = extract::extract(&raw_text)?;
    let post = assembler::assemble(content, lookup).await;
    store.append(post.clone())?;
    Ok(post)
}
