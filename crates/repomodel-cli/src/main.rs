//! repomodel CLI - build a repository model from database metadata.

use clap::{Parser, Subcommand};
use repomodel::{Config, FileFormat, Orchestrator, RepoError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "repomodel")]
#[command(about = "Build a repository model from database metadata")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Introspect the source and write the repository model
    Generate {
        /// Override source schema
        #[arg(long)]
        schema: Option<String>,

        /// Override output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: yaml or json [default: from file extension]
        #[arg(long)]
        format: Option<String>,
    },

    /// List tables visible under the configured scope
    Tables {
        /// Override source schema
        #[arg(long)]
        schema: Option<String>,
    },

    /// Capture raw metadata to a snapshot file
    Snapshot {
        /// Snapshot file to write (.yaml or .json)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Test the metadata source connection
    HealthCheck,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), RepoError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let mut config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    match cli.command {
        Commands::Generate {
            schema,
            output,
            format,
        } => {
            if let Some(schema) = schema {
                config.source.schema = schema;
            }
            if let Some(output) = output {
                config.output.path = output;
            }
            if let Some(format) = format {
                config.output.format = Some(format.parse::<FileFormat>()?);
            }

            let result = Orchestrator::new(config).run().await?;

            if cli.output_json {
                println!("{}", result.to_json()?);
            } else {
                println!("Repository model written to {}", result.output_path.display());
                println!("  Entities:     {}", result.summary.entities);
                println!("  Columns:      {}", result.summary.columns);
                println!("  Foreign keys: {}", result.summary.foreign_keys);
                println!("  Duration:     {:.2}s", result.duration_seconds);
                if !result.degraded_columns.is_empty() {
                    println!(
                        "\n  {} columns need review (placeholder name or type):",
                        result.degraded_columns.len()
                    );
                    for name in &result.degraded_columns {
                        println!("    {}", name);
                    }
                }
            }
        }

        Commands::Tables { schema } => {
            if let Some(schema) = schema {
                config.source.schema = schema;
            }

            let tables = Orchestrator::new(config).list_tables().await?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else {
                for table in &tables {
                    let name = match &table.schema {
                        Some(schema) => format!("{}.{}", schema, table.name),
                        None => table.name.clone(),
                    };
                    println!(
                        "  {:<40} {:<6} {:>4} columns {:>3} foreign keys",
                        name, table.table_type, table.columns, table.foreign_keys
                    );
                }
                println!("\n{} tables", tables.len());
            }
        }

        Commands::Snapshot { output } => {
            let result = Orchestrator::new(config).snapshot(&output).await?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Captured {} tables from {} to {}",
                    result.tables,
                    result.source_type,
                    result.path.display()
                );
            }
        }

        Commands::HealthCheck => {
            let result = Orchestrator::new(config).health_check().await?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Health Check Results:");
                println!(
                    "  Source ({}): {} ({}ms)",
                    result.source_type,
                    if result.connected { "OK" } else { "FAILED" },
                    result.latency_ms
                );
                if let Some(ref err) = result.error {
                    println!("    Error: {}", err);
                }
                println!(
                    "\n  Overall: {}",
                    if result.healthy { "HEALTHY" } else { "UNHEALTHY" }
                );
            }

            if !result.healthy {
                return Err(RepoError::connection(
                    result.error.unwrap_or_else(|| "unknown error".to_string()),
                    "health check",
                ));
            }
        }
    }

    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
