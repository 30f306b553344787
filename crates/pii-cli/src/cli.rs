use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pii")]
#[command(about = "Detect and mask personal data in text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask sensitive entities in a text
    Mask {
        /// Text to mask (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// JSON file with spans to apply instead of running the detector
        #[arg(long)]
        spans: Option<PathBuf>,

        /// Masking mode: replace, hash or tokenize (default from config)
        #[arg(long, short)]
        mode: Option<String>,

        /// Only mask this kind (repeatable)
        #[arg(long, short)]
        kind: Vec<String>,

        /// Detector model override
        #[arg(long)]
        model: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run the detector and print candidate spans as JSON
    Detect {
        /// Text to scan (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Detector model override
        #[arg(long)]
        model: Option<String>,
    },

    /// Restore original text from a masking result
    Unmask {
        /// Masked text file (defaults to the result's masked_text)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// JSON masking result holding the audit trail
        #[arg(long)]
        audit: PathBuf,
    },

    /// Start the HTTP masking service
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Show configuration path and effective settings
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Masked text only
    Text,
    /// Masked text, audit trail and drop counts
    Json,
}
