pub mod handler;

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SubmitCommands {
    /// RVTools export (.xls or .xlsx)
    pub file: PathBuf,

    /// Pricing endpoint URL (overrides config and RVSIZER_PRICING_URL)
    #[arg(long, short = 'e')]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, short = 't')]
    pub timeout: Option<u64>,
}
