/*
* Machine Sentry Command Line Interface
* -------------------------------------
* Git-style subcommands via clap, because life's too short for getopt.
*
* Command Structure:
* ---------------
* machine-sentry
* ├── serve [--port]       // Run the report API server
* ├── analyze [--file]     // One-shot analysis of a sensor CSV
* ├── dashboard [--file]   // Terminal dashboard over a sensor CSV
* └── init [--force]       // Generate default configuration
*
* Output is colored: red means a machine is cooking, yellow means it is
* shaking itself apart, green means you get to go home on time.
*/

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use crate::analysis::{self, Issue};
use crate::config::{generate_default_config, Settings};
use crate::telemetry::loader::CachedLoader;

#[derive(Parser)]
#[command(name = "machine-sentry")]
#[command(about = "Industrial maintenance agent over machine sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the report API server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze a sensor CSV and print maintenance recommendations
    Analyze {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Launch the terminal dashboard
    Dashboard {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Generate default configuration
    Init {
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::new_from_file(path)?,
        None => Settings::new()?,
    };

    match cli.command {
        Commands::Serve { port } => {
            let server_port = port.unwrap_or(settings.server.port);
            info!("Starting server on port {}", server_port);
            crate::api::run_server(settings, server_port).await?;
        }
        Commands::Analyze { file } => handle_analyze_command(file, &settings)?,
        Commands::Dashboard { file } => {
            let path = file.unwrap_or_else(|| settings.telemetry.data_path.clone());
            crate::dashboard::start_dashboard(path).await?;
        }
        Commands::Init { force } => {
            handle_init_command(force)?;
        }
    }

    Ok(())
}

fn handle_analyze_command(
    file: Option<PathBuf>,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = file.unwrap_or_else(|| settings.telemetry.data_path.clone());
    info!("Analyzing sensor data from {}", path.display());

    let mut loader = CachedLoader::new();
    let readings = loader.load(&path)?;
    let report = analysis::analyze_readings(&readings);

    if report.all_clear {
        println!(
            "{} All machines are operating within safe parameters.",
            "✓".green()
        );
        return Ok(());
    }

    println!("{}", "Maintenance Recommendations:".bold());
    for (anomaly, recommendation) in report.anomalies.iter().zip(&report.recommendations) {
        let bullet = match anomaly.issue {
            Issue::Overheating => "●".red(),
            Issue::HighVibration => "●".yellow(),
        };
        println!("{} {}", bullet, recommendation);
    }
    println!(
        "{} readings analyzed, {} flagged",
        readings.len(),
        report.anomalies.len()
    );

    Ok(())
}

fn handle_init_command(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = PathBuf::from("config");
    let config_file = config_dir.join("default.toml");
    if config_file.exists() && !force {
        eprintln!("Configuration file already exists. Use --force to overwrite.");
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)?;
    let default_config = generate_default_config();
    let config_str = toml::to_string_pretty(&default_config)?;
    std::fs::write(&config_file, config_str)?;

    println!("{} Default configuration generated", "✓".green());
    Ok(())
}
