//! Command-line interface

pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    config::ConfigCommands, parse::ParseCommands, provision::ProvisionCommands,
    submit::SubmitCommands,
};

#[derive(Parser, Debug)]
#[command(name = "rvsizer")]
#[command(about = "Turn RVTools exports into sizing prompts and request provisioning")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an RVTools export into prompts and preview the JSON body
    Parse(ParseCommands),
    /// Convert an RVTools export and submit the prompts to the pricing endpoint
    Submit(SubmitCommands),
    /// Request a compute instance or managed database
    #[command(subcommand)]
    Provision(ProvisionCommands),
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse(args) => commands::parse::handler::handle_parse_command(args),
        Commands::Submit(args) => commands::submit::handler::handle_submit_command(args).await,
        Commands::Provision(cmd) => {
            commands::provision::handler::handle_provision_command(cmd, cli.verbose > 0).await
        }
        Commands::Config(cmd) => commands::config::handler::handle_config_command(cmd),
    }
}
