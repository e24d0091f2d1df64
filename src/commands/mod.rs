pub mod fill;
pub mod init;
pub mod plan;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Fill the time tracker with work logs over a date range", arg_required_else_help = true)]
    Fill(fill::FillArgs),
    #[command(about = "Show the work logs a fill would target, without remote calls", arg_required_else_help = true)]
    Plan(plan::PlanArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Fill(args) => fill::cmd(args).await,
            Commands::Plan(args) => plan::cmd(args),
        }
    }
}
