//! cloudcli CLI entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cloudcli::commands::{list_entries, login};
use cloudcli::session::LoginOptions;

#[derive(Parser)]
#[command(name = "cloudcli")]
#[command(author, version, about = "Log into Azure tenants or GCP projects and connect to their clusters", long_about = None)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login to Azure/GCP and select tenant, subscription and cluster
    Login {
        /// Tenants file (defaults to ~/tenants.json)
        #[arg(short, long, env = "CLOUDCLI_TENANTS_FILE")]
        file: Option<PathBuf>,
        /// Stop after login and subscription/project selection
        #[arg(long)]
        no_clusters: bool,
    },
    /// Print the numbered list of tenants and projects
    List {
        /// Tenants file (defaults to ~/tenants.json)
        #[arg(short, long, env = "CLOUDCLI_TENANTS_FILE")]
        file: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Login { file, no_clusters }) => {
            login(file.as_deref(), LoginOptions { no_clusters })?;
        }
        Some(Commands::List { file }) => {
            print!("{}", list_entries(file.as_deref())?);
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        None => {
            login(None, LoginOptions::default())?;
        }
    }

    Ok(())
}
