//! Possession Analysis CLI
//!
//! Tracking JSON → pass / interception / team control report

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use pe_core::InterceptionGapPolicy;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pe_cli")]
#[command(about = "Detect passes, interceptions and team ball control from tracking output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Analyze a request file and write the JSON report
    Analyze {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output report JSON file path
        #[arg(long)]
        out: PathBuf,

        /// Interception gap policy (frame_index_vs_track_id | holder_changed)
        #[arg(long)]
        policy: Option<InterceptionGapPolicy>,

        /// Pretty-print the report
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Print per-team totals for a request file
    Summary {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Interception gap policy (frame_index_vs_track_id | holder_changed)
        #[arg(long)]
        policy: Option<InterceptionGapPolicy>,
    },
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            r#in,
            out,
            policy,
            pretty,
        } => {
            let config = pe_cli::resolve_config(policy)?;
            println!("Analyzing possession...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());
            println!("   Policy: {}", config.interception_policy);

            let analysis = pe_cli::analyze_file(&r#in, config, policy)?;
            pe_cli::write_output(&out, &analysis, pretty)?;

            println!("\n{}", pe_cli::summarize(&analysis.report));
            println!("   Checksum: {}", analysis.metadata.input_checksum);
            println!("   Created:  {}", analysis.metadata.created_at);
        }

        Commands::Summary { r#in, policy } => {
            let config = pe_cli::resolve_config(policy)?;
            let analysis = pe_cli::analyze_file(&r#in, config, policy)?;
            println!("{}", pe_cli::summarize(&analysis.report));
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pe_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
