//! CLI definitions for pagebrief.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pagebrief_config::default_config_path;
use pagebrief_protocols::SummaryStyle;

/// pagebrief CLI.
#[derive(Parser)]
#[command(name = "pagebrief")]
#[command(about = "Extract the article from a web page and summarize it with Gemini")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value_os_t = default_config_path(), global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Summarize the article on a page
    Summarize {
        /// Page URL (http/https) or local HTML file
        source: String,

        /// Summary style: brief, detailed, bullets or default
        #[arg(short, long, default_value = "default", value_parser = parse_style)]
        style: SummaryStyle,
    },

    /// Print the extracted article text as JSON
    Extract {
        /// Page URL (http/https) or local HTML file
        source: String,
    },

    /// Manage the stored Gemini API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum KeyAction {
    /// Store the API key
    Set {
        /// Gemini API key
        key: String,
    },

    /// Remove the stored API key
    Clear,
}

/// Unrecognized styles fall back to the default prompt.
fn parse_style(value: &str) -> Result<SummaryStyle, String> {
    Ok(SummaryStyle::from_selector(value))
}
