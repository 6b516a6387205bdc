//! Blogsmith binary
//!
//! Runs one end-to-end pipeline and appends the generated post to the store.
//! Exits nonzero when no post was produced, with the failing phase (stage,
//! extraction, or persistence) reported in the logs.

use blogsmith::config::Config;
use blogsmith::generation::DeepSeekClient;
use blogsmith::images::UnsplashClient;
use blogsmith::pipeline::default_stages;
use blogsmith::store::PostStore;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!(
        store_path = %config.store.path,
        model = %config.generation.model,
        stage_timeout_secs = config.pipeline.stage_timeout_secs,
        max_attempts = config.pipeline.max_attempts,
        "Configuration loaded"
    );

    // One shared HTTP client for both services (connection pooling). The
    // image lookup applies its own shorter bound on top of this.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.pipeline.stage_timeout_secs))
        .build()?;

    let generator = DeepSeekClient::new(http.clone(), &config.generation);
    let lookup = UnsplashClient::new(http, &config.image);
    let store = PostStore::new(&config.store.path);
    let stages = default_stages(
        Duration::from_secs(config.pipeline.stage_timeout_secs),
        config.pipeline.max_attempts,
    );

    match blogsmith::generate_blog_post(
        &generator,
        &stages,
        &lookup,
        &store,
        config.generation.temperature,
    )
    .await
    {
        Ok(post) => {
            info!(id = %post.id, title = %post.title, "New blog post generated");
            println!("New blog post generated: {}", post.title);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to generate blog post");
            println!("Failed to generate new blog post.");
            Err(e.into())
        }
    }
}
