mod config;
mod errors;
mod extraction;
mod generation;
mod layout;
mod llm_client;
mod models;
mod pipeline;
mod render;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pipeline::RunOutcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (.env is optional, every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting prep-kit v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Selected outputs: {:?}, questions: {}, level: {}",
        config.outputs.iter().map(|k| k.label()).collect::<Vec<_>>(),
        config.question_count,
        config.experience_level.as_str()
    );

    // Initialize LLM client (a missing key is reported inside the generated documents)
    let llm = LlmClient::from_config(&config)?;
    info!("LLM client initialized (model: {})", llm.model());

    match pipeline::execute(&config, &llm).await? {
        RunOutcome::Completed(documents) => {
            for doc in &documents {
                info!("{}: {} ({} pages)", doc.kind.label(), doc.path.display(), doc.pages);
            }
        }
        RunOutcome::Failed { error_file, .. } => {
            info!("Run stopped; see {}", error_file.display());
        }
    }

    Ok(())
}
