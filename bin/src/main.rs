//! seatwise CLI - admission estimates from counselling cutoff data.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

mod commands;
mod display;
mod server;

#[derive(Parser)]
#[command(name = "seatwise")]
#[command(about = "Admission estimates from counselling cutoff data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the cutoff dataset CSV
    #[arg(short, long, global = true, default_value = "cutoffs.csv")]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "0.0.0.0:5000")]
        addr: SocketAddr,
    },

    /// Estimate admission chances for a rank
    Predict {
        /// Candidate rank
        #[arg(short, long)]
        rank: i64,

        /// Admission quota (e.g., HS, OS)
        #[arg(short, long)]
        quota: String,

        /// Reservation category (e.g., OPEN, OBC)
        #[arg(short, long)]
        category: String,

        /// Seat gender pool (e.g., Gender-Neutral)
        #[arg(short, long)]
        gender: String,

        /// Counselling round
        #[arg(long)]
        round: String,

        /// Maximum number of programs to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Search institutes and programs by name
    Lookup {
        /// Institute name pattern (case-insensitive substring)
        name: String,

        /// Program name pattern
        #[arg(short, long)]
        program: Option<String>,
    },

    /// Show a summary of the loaded dataset
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { addr } => commands::serve::serve(&cli.data, addr).await,
        Commands::Predict {
            rank,
            quota,
            category,
            gender,
            round,
            top,
        } => commands::predict::predict(&cli.data, rank, &quota, &category, &gender, &round, top),
        Commands::Lookup { name, program } => {
            commands::lookup::lookup(&cli.data, &name, program.as_deref())
        }
        Commands::Info => commands::info::show_info(&cli.data),
    }
}
