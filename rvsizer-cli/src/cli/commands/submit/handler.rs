//! Submit command handler

use anyhow::Result;
use colored::*;
use std::time::{Duration, Instant};

use super::SubmitCommands;
use crate::api::{ApiClient, PricingOutcome};
use crate::cli::commands::load_prompt_batch;
use crate::config::Config;

pub async fn handle_submit_command(args: SubmitCommands) -> Result<()> {
    let config = Config::load()?;

    let batch = load_prompt_batch(&args.file)?;
    println!(
        "Parsed {} prompts from {}",
        batch.len().to_string().cyan(),
        args.file.display()
    );

    let endpoint = args.endpoint.unwrap_or(config.pricing.endpoint.clone());
    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.timeout());

    let client = ApiClient::new(timeout)?;

    let start = Instant::now();
    let outcome = client.submit_prompts(&endpoint, &batch).await?;
    log::info!("Pricing request completed in {:?}", start.elapsed());

    match &outcome {
        PricingOutcome::Text(_) => println!("{}", outcome.to_string().bright_green()),
        PricingOutcome::Raw(_) => println!("{}", outcome.to_string().green()),
    }

    Ok(())
}
