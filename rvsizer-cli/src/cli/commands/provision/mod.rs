pub mod handler;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum ProvisionCommands {
    /// Request a compute instance
    Instance(InstanceArgs),
    /// Request a managed database
    Database(DatabaseArgs),
}

#[derive(Args, Debug)]
pub struct InstanceArgs {
    /// Instance name
    #[arg(long)]
    pub name: String,

    /// One of: t2.micro, t2.small, t2.medium, m5.large, c5.large
    #[arg(long)]
    pub instance_type: String,

    /// Storage size in GB (minimum 1)
    #[arg(long)]
    pub storage: u32,

    /// One of: "Amazon Linux 2", Ubuntu, Windows, RHEL
    #[arg(long)]
    pub os: String,

    /// Provisioning endpoint URL (overrides config and RVSIZER_INSTANCE_URL)
    #[arg(long, short = 'e')]
    pub endpoint: Option<String>,
}

#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// One of: mysql, postgresql, mariadb, oracle, sqlserver
    #[arg(long)]
    pub engine: String,

    /// One of: db.t3.micro, db.t3.small, db.t3.medium, db.m5.large
    #[arg(long)]
    pub db_interface: String,

    /// Database instance identifier
    #[arg(long)]
    pub identifier: String,

    /// Storage size in GB (minimum 5)
    #[arg(long)]
    pub storage: u32,

    /// Initial database name
    #[arg(long)]
    pub name: String,

    /// Provisioning endpoint URL (overrides config and RVSIZER_DATABASE_URL)
    #[arg(long, short = 'e')]
    pub endpoint: Option<String>,
}
