//! Stage pipeline orchestrator
//!
//! Executes the fixed stage sequence strictly in order, threading the
//! accumulated context into each stage's prompt. Each attempt is bounded by
//! the stage's timeout; failed attempts are retried with the same prompt up
//! to the stage's retry budget. A stage that exhausts its budget aborts the
//! run: no later stage executes and no partial result is produced.

use crate::error::{PipelineError, StageCause};
use crate::generation::{GenerationRequest, TextGenerator};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::stages::StageSpec;
use tokio::time::timeout;

/// Run all stages in order and return the final stage's raw text
///
/// Stage N's prompt is only composed after stage N-1's output is known; no
/// stage runs concurrently with another. Intermediate outputs are discarded
/// once the run completes.
///
/// # Errors
/// * `PipelineError::Stage` - a stage exhausted its retry budget; carries the
///   stage name and the final attempt's cause
pub async fn run_pipeline(
    generator: &dyn TextGenerator,
    stages: &[StageSpec],
    temperature: f32,
) -> Result<String, PipelineError> {
    let mut context = PipelineContext::new();
    let mut raw_text = String::new();

    for stage in stages {
        let prompt = context.compose_prompt(stage.role_prompt);

        tracing::info!(
            stage = stage.name,
            prompt_len = prompt.len(),
            completed_stages = context.len(),
            "Running pipeline stage"
        );

        let output = run_stage(generator, stage, &prompt, temperature).await?;

        tracing::info!(
            stage = stage.name,
            output_len = output.len(),
            "Pipeline stage completed"
        );

        context.push(stage.name, output.clone());
        raw_text = output;
    }

    Ok(raw_text)
}

/// Run one stage: bounded attempts, each wrapped in the stage's timeout
async fn run_stage(
    generator: &dyn TextGenerator,
    stage: &StageSpec,
    prompt: &str,
    temperature: f32,
) -> Result<String, PipelineError> {
    let request = GenerationRequest::new(prompt.to_string(), temperature);
    let mut last_cause = StageCause::EmptyOutput;

    for attempt in 1..=stage.max_attempts {
        let cause = match timeout(stage.timeout, generator.generate(&request)).await {
            Err(_elapsed) => StageCause::Timeout,
            Ok(Err(e)) => {
                tracing::warn!(
                    stage = stage.name,
                    attempt = attempt,
                    error = %e,
                    "Stage attempt failed"
                );
                e.stage_cause()
            }
            Ok(Ok(output)) => {
                // The client guarantees non-empty text, but the trait does not.
                if output.trim().is_empty() {
                    StageCause::EmptyOutput
                } else {
                    return Ok(output);
                }
            }
        };

        tracing::warn!(
            stage = stage.name,
            attempt = attempt,
            max_attempts = stage.max_attempts,
            cause = %cause,
            "Stage attempt unsuccessful"
        );
        last_cause = cause;
    }

    Err(PipelineError::Stage {
        stage: stage.name,
        cause: last_cause,
        attempts: stage.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Generator that replays a scripted sequence of outcomes and records
    /// every prompt it was given.
    struct ScriptedGenerator {
        script: Mutex<VecDeque<Result<String, GenerationError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(script: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn prompt(&self, index: usize) -> String {
            self.prompts.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::Empty))
        }
    }

    /// Generator that never answers within any reasonable timeout.
    struct StallingGenerator;

    #[async_trait]
    impl TextGenerator for StallingGenerator {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<String, GenerationError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(GenerationError::Empty)
        }
    }

    fn stage(name: &'static str, max_attempts: u32) -> StageSpec {
        StageSpec {
            name,
            role_prompt: "role instructions",
            max_attempts,
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_single_stage_success_returns_output() {
        let generator = ScriptedGenerator::new(vec![Ok("final text".to_string())]);
        let stages = vec![stage("publishing", 3)];

        let result = run_pipeline(&generator, &stages, 0.7).await.unwrap();
        assert_eq!(result, "final text");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_context_threaded_into_later_prompts() {
        let generator = ScriptedGenerator::new(vec![
            Ok("first output".to_string()),
            Ok("second output".to_string()),
        ]);
        let stages = vec![stage("research", 3), stage("writing", 3)];

        let result = run_pipeline(&generator, &stages, 0.7).await.unwrap();
        assert_eq!(result, "second output");

        // First prompt has no context, second carries the labeled first output.
        assert!(!generator.prompt(0).contains("first output"));
        let second = generator.prompt(1);
        assert!(second.contains("## Output from the research stage:"));
        assert!(second.contains("first output"));
    }

    #[tokio::test]
    async fn test_retry_then_success() {
        let generator = ScriptedGenerator::new(vec![
            Err(GenerationError::Transport("connection reset".to_string())),
            Ok("recovered".to_string()),
        ]);
        let stages = vec![stage("research", 3)];

        let result = run_pipeline(&generator, &stages, 0.7).await.unwrap();
        assert_eq!(result, "recovered");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_retries_use_same_prompt() {
        let generator = ScriptedGenerator::new(vec![
            Err(GenerationError::RateLimited),
            Ok("ok".to_string()),
        ]);
        let stages = vec![stage("research", 2)];

        run_pipeline(&generator, &stages, 0.7).await.unwrap();
        assert_eq!(generator.prompt(0), generator.prompt(1));
    }

    #[tokio::test]
    async fn test_exhausted_retries_abort_run() {
        let generator = ScriptedGenerator::new(vec![
            Err(GenerationError::RateLimited),
            Err(GenerationError::RateLimited),
            Err(GenerationError::RateLimited),
        ]);
        let stages = vec![stage("research", 3), stage("writing", 3)];

        let err = run_pipeline(&generator, &stages, 0.7).await.unwrap_err();
        match err {
            PipelineError::Stage {
                stage,
                cause,
                attempts,
            } => {
                assert_eq!(stage, "research");
                assert_eq!(cause, StageCause::RateLimited);
                assert_eq!(attempts, 3);
            }
            other => panic!("expected stage error, got: {other}"),
        }
        // The writing stage never ran.
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_empty_output_is_retried_and_reported() {
        let generator = ScriptedGenerator::new(vec![
            Ok("   \n ".to_string()),
            Ok("  ".to_string()),
        ]);
        let stages = vec![stage("research", 2)];

        let err = run_pipeline(&generator, &stages, 0.7).await.unwrap_err();
        match err {
            PipelineError::Stage { cause, .. } => assert_eq!(cause, StageCause::EmptyOutput),
            other => panic!("expected stage error, got: {other}"),
        }
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_timeout_is_attributed() {
        let generator = StallingGenerator;
        let stages = vec![StageSpec {
            name: "editing",
            role_prompt: "edit",
            max_attempts: 2,
            timeout: Duration::from_millis(10),
        }];

        let err = run_pipeline(&generator, &stages, 0.7).await.unwrap_err();
        match err {
            PipelineError::Stage {
                stage,
                cause,
                attempts,
            } => {
                assert_eq!(stage, "editing");
                assert_eq!(cause, StageCause::Timeout);
                assert_eq!(attempts, 2);
            }
            other => panic!("expected stage error, got: {other}"),
        }
    }
}
