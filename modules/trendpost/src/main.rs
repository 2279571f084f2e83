use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use ai_client::OpenAi;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trendpost::{ApifyTrendProvider, Config, Driver, FileTrendProvider, Presets, TrendProvider};

#[derive(Parser)]
#[command(name = "trendpost")]
#[command(about = "Generate a social media post about a trending song")]
#[command(version)]
struct Cli {
    /// Read trends from a saved JSON snapshot instead of scraping
    #[arg(long, value_name = "PATH")]
    trends_file: Option<PathBuf>,

    /// Song number from the trending list (skips the prompt)
    #[arg(long)]
    song: Option<usize>,

    /// Tone of the post, e.g. neutral, energetic, funny
    #[arg(long)]
    tone: Option<String>,

    /// Length class: short, medium or long
    #[arg(long)]
    length: Option<String>,

    /// Target platform: twitter, instagram, tiktok or "blog post"
    #[arg(long)]
    platform: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the session and the post.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trendpost=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("An error occurred: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    config.log_redacted();

    let mut completion = OpenAi::new(&config.openai_api_key, &config.openai_model)
        .with_temperature(config.temperature)
        .with_timeout(config.request_timeout);
    if let Some(ref url) = config.openai_base_url {
        completion = completion.with_base_url(url);
    }
    if let Some(max) = config.max_tokens {
        completion = completion.with_max_tokens(max);
    }

    let provider: Box<dyn TrendProvider> = match cli.trends_file {
        Some(path) => Box::new(FileTrendProvider::new(path)),
        None => Box::new(ApifyTrendProvider::from_config(&config)?),
    };

    let presets = Presets {
        song: cli.song,
        tone: cli.tone,
        length: cli.length,
        platform: cli.platform,
    };

    let driver = Driver::new(provider, completion).with_presets(presets);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let post = driver.run(&mut input, &mut output).await?;

    info!(words = post.word_count(), "Done");
    Ok(())
}
