//! litbuild CLI tool.

use clap::{Parser, Subcommand};
use litbuild_config::ModelRequest;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "litbuild")]
#[command(about = "Compile literate build documents into a project model", long_about = None)]
struct Cli {
    /// Project directory holding the marker document
    #[arg(long, env = "LITBUILD_PROJECT_DIR", default_value = ".")]
    project_dir: String,

    /// Marker document base name (resolved as .<name>.yml)
    #[arg(long, env = "LITBUILD_BASE_NAME", default_value = "litbuild")]
    base_name: String,

    /// Comma/space-delimited top-level keys treated as build sections
    #[arg(long, default_value = "build")]
    build_id: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the project's literate document
    Validate {
        /// Validate this file instead of resolving a marker document
        #[arg(long)]
        file: Option<String>,
    },
    /// Show the compiled model: environments, build commands, tasks
    Show,
    /// List the model's tasks
    Tasks {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let request = ModelRequest::new(cli.base_name.as_str()).with_build_id(&cli.build_id);

    match cli.command {
        Commands::Validate { file } => {
            commands::validate(&request, &cli.project_dir, file.as_deref())
        }
        Commands::Show => commands::show(&request, &cli.project_dir),
        Commands::Tasks { json } => commands::tasks(&request, &cli.project_dir, json),
    }
}
