//! Stage pipeline
//!
//! The ordered stage declarations, the context accumulator threaded through a
//! run, and the sequential orchestrator that executes them.

pub mod context;
pub mod orchestrator;
pub mod stages;

pub use context::PipelineContext;
pub use orchestrator::run_pipeline;
pub use stages::{default_stages, StageSpec};
