//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Credentials and endpoints for the generation and
//! image services are supplied externally; nothing here is baked in.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Generation service configuration
    pub generation: GenerationConfig,
    /// Image lookup service configuration
    pub image: ImageConfig,
    /// Pipeline execution configuration
    pub pipeline: PipelineConfig,
    /// Post store configuration
    pub store: StoreConfig,
}

/// Generation service configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// API key for the DeepSeek service
    pub api_key: String,
    /// Base URL of the DeepSeek API
    pub api_url: String,
    /// Model name to request
    pub model: String,
    /// Sampling temperature for all stages
    pub temperature: f32,
}

/// Image lookup service configuration
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Unsplash access key
    pub access_key: String,
    /// Base URL of the Unsplash API
    pub api_url: String,
    /// Fixed timeout for a lookup (in seconds)
    pub timeout_secs: u64,
}

/// Pipeline execution configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Per-attempt timeout for each stage (in seconds)
    pub stage_timeout_secs: u64,
    /// Retry budget per stage
    pub max_attempts: u32,
}

/// Post store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the serialized post collection
    pub path: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            generation: GenerationConfig {
                api_key: env::var("DEEPSEEK_API_KEY").unwrap_or_default(),
                api_url: env::var("DEEPSEEK_API_URL")
                    .unwrap_or_else(|_| "https://api.deepseek.com".to_string()),
                model: env::var("DEEPSEEK_MODEL")
                    .unwrap_or_else(|_| "deepseek-chat".to_string()),
                temperature: env::var("TEMPERATURE")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(0.7),
            },
            image: ImageConfig {
                access_key: env::var("UNSPLASH_ACCESS_KEY").unwrap_or_default(),
                api_url: env::var("UNSPLASH_API_URL")
                    .unwrap_or_else(|_| "https://api.unsplash.com".to_string()),
                timeout_secs: env::var("IMAGE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(10),
            },
            pipeline: PipelineConfig {
                stage_timeout_secs: env::var("STAGE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(60),
                max_attempts: env::var("STAGE_MAX_ATTEMPTS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(3),
            },
            store: StoreConfig {
                path: env::var("BLOG_POSTS_FILE")
                    .unwrap_or_else(|_| "blog_posts.json".to_string()),
            },
        }
    }
}
