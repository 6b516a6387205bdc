//! Pipeline context accumulator
//!
//! Ordered record of the outputs produced so far in one run. Owned
//! exclusively by the orchestrator for the duration of the run, so no
//! synchronization is needed.

/// Accumulated `(stage name, output)` pairs for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    outputs: Vec<(&'static str, String)>,
}

impl PipelineContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed stage's output
    pub fn push(&mut self, stage_name: &'static str, output: String) {
        self.outputs.push((stage_name, output));
    }

    /// Number of completed stages
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// True before any stage has completed
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Compose the full prompt for a stage: its role instructions followed by
    /// every prior stage's output, labeled by stage name so later stages can
    /// reference earlier results.
    pub fn compose_prompt(&self, role_prompt: &str) -> String {
        let mut prompt = role_prompt.to_string();
        for (stage_name, output) in &self.outputs {
            prompt.push_str("\n\n## Output from the ");
            prompt.push_str(stage_name);
            prompt.push_str(" stage:\n");
            prompt.push_str(output);
        }
        prompt
    }
}
