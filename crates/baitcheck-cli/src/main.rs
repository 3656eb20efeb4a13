use std::path::PathBuf;

use anyhow::Context;
use baitcheck_ai::Classifier;
use baitcheck_llm::{LlmClient, credentials};
use clap::Parser;

mod display;
mod fetch;
mod pipeline;

/// Local-first clickbait detector with an optional remote second opinion.
#[derive(Parser)]
#[command(name = "baitcheck", version, about)]
struct Cli {
    /// Page URL to analyze (or a local HTML file with --file).
    target: String,

    /// Treat TARGET as a local HTML file instead of a URL.
    #[arg(long)]
    file: bool,

    /// Directory containing model.onnx and optionally vocab.json.
    #[arg(
        long,
        env = "BAITCHECK_MODEL_DIR",
        default_value = "models/clickbait-classifier"
    )]
    model_dir: PathBuf,

    /// Positive-class probability cutoff (strictly greater than).
    #[arg(long, default_value_t = baitcheck_core::CLASSIFICATION_THRESHOLD)]
    threshold: f32,

    /// API key for the remote chat-completion endpoint. Without a key the
    /// remote second opinion is skipped.
    #[arg(long, env = "BAITCHECK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// The API key value is base64-obfuscated and must be decoded before use.
    #[arg(long)]
    encoded_api_key: bool,

    /// Chat-completion endpoint base URL.
    #[arg(long, env = "BAITCHECK_API_URL", default_value = baitcheck_llm::DEFAULT_BASE_URL)]
    api_url: String,

    /// Remote model identifier.
    #[arg(long, default_value = baitcheck_llm::DEFAULT_MODEL)]
    api_model: String,

    /// Skip the remote second opinion even for positive verdicts.
    #[arg(long)]
    no_remote: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let html = if cli.file {
        std::fs::read_to_string(&cli.target).with_context(|| format!("reading {}", cli.target))?
    } else {
        fetch::fetch_page(&cli.target).await?
    };

    let classifier = Classifier::new(&cli.model_dir)
        .with_context(|| format!("initializing classifier from {}", cli.model_dir.display()))?
        .with_threshold(cli.threshold);

    let llm = match (&cli.api_key, cli.no_remote) {
        (Some(key), false) => {
            let key = if cli.encoded_api_key {
                credentials::decode_api_key(key).context("decoding stored API key")?
            } else {
                key.clone()
            };
            Some(LlmClient::new(cli.api_url, key, cli.api_model))
        }
        _ => None,
    };

    let report = pipeline::run_pipeline(&html, &classifier, llm.as_ref()).await?;
    display::print_report(&report);
    Ok(())
}
