use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "marketscope", about = "AI market research report generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the research pipeline for a query and store the report
    Generate {
        /// Market research query (e.g. "AI trends in healthcare 2024")
        query: String,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        timeframe: Option<String>,
        /// Output language (English, Spanish, French, German, Hindi, Chinese)
        #[arg(long, default_value = "English")]
        lang: String,
        /// Print Markdown instead of JSON
        #[arg(long)]
        markdown: bool,
    },
    /// List stored reports, oldest first
    Reports {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Show a stored report, optionally translated
    Show {
        /// Report ID
        id: String,
        #[arg(long, default_value = "English")]
        lang: String,
        #[arg(long)]
        markdown: bool,
    },
    /// List supported output languages
    Languages,
}
