//! pagebrief - article extraction and Gemini summarization
//!
//! Main entry point for the pagebrief CLI.

mod cli;
mod flow;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use pagebrief_config::{ConfigLoader, ConfigValidator, JsonFileStore, LoggingConfig};
use pagebrief_content_extractor::PageFetcher;
use pagebrief_protocols::{ContentChannel, ContentRequest, KeyValueStore, API_KEY_STORAGE_KEY};
use pagebrief_provider_gemini::SummaryClient;

use cli::{Cli, Commands, KeyAction};
use flow::{exit_code, is_copyable_summary, open_page, render_outcome, summarize_page};

/// Install the subscriber. The returned guard flushes the log file on drop.
fn init_tracing(
    logging: &LoggingConfig,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Console output goes to stderr so stdout carries only results
    let console = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    let (file, guard) = match &logging.directory {
        Some(dir) => {
            let (non_blocking, guard) = file_writer(dir)?;
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(guard)
}

/// Daily rolling log file under `dir`. Pending lines are flushed when the guard drops.
fn file_writer(dir: &str) -> Result<(NonBlocking, WorkerGuard), Box<dyn std::error::Error>> {
    let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("pagebrief")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    Ok(tracing_appender::non_blocking(file_appender))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    let _guard = init_tracing(&config.logging)?;
    debug!("Loaded configuration from {}", cli.config.display());

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let store = JsonFileStore::new(ConfigLoader::expand_path(&config.storage.path));
    let fetcher = PageFetcher::with_timeout(config.gemini.request_timeout_secs.map(Duration::from_secs))?;

    match cli.command {
        Commands::Summarize { source, style } => {
            let summarizer = SummaryClient::from_config(config.gemini)?;

            let page = open_page(&fetcher, &source);
            let outcome = summarize_page(&store, page, &summarizer, style).await;
            let shown = render_outcome(&outcome);
            debug!(copyable = is_copyable_summary(&shown), "Summarize finished");
            println!("{}", shown);
            Ok(exit_code(&outcome))
        }
        Commands::Extract { source } => {
            let channel = open_page(&fetcher, &source).await?;
            let response = channel
                .send_message(ContentRequest::GetArticleText.to_message())
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);

            Ok(if response.is_some_and(|r| r.is_success()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Key { action } => {
            handle_key_command(&store, action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn handle_key_command(
    store: &dyn KeyValueStore,
    action: KeyAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        KeyAction::Set { key } => {
            let key = key.trim();
            if key.is_empty() {
                return Err("API key must not be empty".into());
            }
            store.set(API_KEY_STORAGE_KEY, key)?;
            println!("API key saved");
        }
        KeyAction::Clear => {
            store.remove(API_KEY_STORAGE_KEY)?;
            println!("API key cleared");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_flushed_when_guard_drops() {
        let dir = tempfile::tempdir().unwrap();
        let (writer, guard) = file_writer(&dir.path().to_string_lossy()).unwrap();

        let subscriber = fmt().with_writer(writer).with_ansi(false).finish();
        tracing::subscriber::with_default(subscriber, || {
            for i in 0..50 {
                tracing::error!(line = i, "Summarize failed");
            }
        });
        drop(guard);

        let mut written = String::new();
        for entry in std::fs::read_dir(dir.path()).unwrap() {
            written.push_str(&std::fs::read_to_string(entry.unwrap().path()).unwrap());
        }
        assert_eq!(written.matches("Summarize failed").count(), 50);
        assert!(written.contains("line=49"));
    }
}
