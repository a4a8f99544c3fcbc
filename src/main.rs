use anyhow::Result;
use clap::Parser;
use gemini_probe::models::{
    Config, ProbeOptions, DEFAULT_BASE_URL, DEFAULT_ENV_FILE, DEFAULT_MODEL,
};
use gemini_probe::{probe, prompts, Error};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status when the API key cannot be resolved.
const MISSING_CREDENTIAL_EXIT_CODE: i32 = 1;

#[derive(Debug, Parser)]
#[command(name = "gemini-probe")]
#[command(about = "Send one search-augmented request to the Gemini API and print the response")]
struct CliArgs {
    /// Env file imported before reading GEMINI_API_KEY.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Model ID to call.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Prompt text to send.
    #[arg(long, default_value = prompts::PROBE)]
    prompt: String,

    /// Do not enable the Google Search tool.
    #[arg(long)]
    no_search: bool,

    /// API base URL.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl From<CliArgs> for ProbeOptions {
    fn from(args: CliArgs) -> Self {
        Self {
            env_file: args.env_file,
            model: args.model,
            base_url: args.base_url,
            prompt: args.prompt,
            google_search: !args.no_search,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_probe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match Config::load(args.into()) {
        Ok(config) => config,
        Err(e @ Error::MissingCredential { .. }) => {
            println!("Error: {}", e);
            println!("Please ensure the env file exists or export the key.");
            std::process::exit(MISSING_CREDENTIAL_EXIT_CODE);
        }
        Err(e) => return Err(e.into()),
    };

    let client = probe::http_client(&config);
    let mut stdout = std::io::stdout().lock();
    probe::run(&config, &client, &mut stdout).await?;

    Ok(())
}
