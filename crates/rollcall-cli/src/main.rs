//! rollcall CLI — interactive attendance tracking at a terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rollcall", version, about = "Terminal attendance tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive attendance menu
    Run {
        /// Records file (created on the first mark)
        #[arg(long, default_value = "attendance_records.txt")]
        records: PathBuf,

        /// Roster seed file (TOML) to load at startup
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Create an example roster file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rollcall_core=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { records, roster } => commands::run::execute(records, roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
