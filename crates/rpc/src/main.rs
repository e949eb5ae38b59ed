//! Cinder CLI - Main entry point

use clap::{Parser, Subcommand};
use cinder_rpc::{commands, AppContext};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinder")]
#[command(about = "Cinder - deflationary fungible-value ledger", long_about = None)]
struct Cli {
    /// Token name for this ledger instance
    #[arg(long, default_value = "Cinder Token")]
    name: String,

    /// Token symbol
    #[arg(long, default_value = "CIN")]
    symbol: String,

    /// Account credited with the genesis supply
    #[arg(long, default_value = "deployer")]
    deployer: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a built-in demonstration scenario
    Demo,

    /// Execute a JSON script of ledger operations
    Run {
        /// Path to the script file (see demos/transfers.json)
        script: PathBuf,
    },

    /// Print token metadata and genesis parameters
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut ctx = AppContext::new(&cli.name, &cli.symbol, &cli.deployer);

    match cli.command {
        Commands::Demo => {
            let printer = ctx.attach_printer();
            commands::demo(&mut ctx);
            // closing the ledger and bus lets the printer drain and stop
            drop(ctx);
            printer.await?;
        }

        Commands::Run { script } => {
            let printer = ctx.attach_printer();
            commands::run_script(&mut ctx, &script).await?;
            drop(ctx);
            printer.await?;
        }

        Commands::Info => {
            commands::info(&ctx);
        }
    }

    Ok(())
}
