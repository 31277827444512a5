//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use rota_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "rota")]
#[command(version)]
#[command(about = "Employee roster manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common credential arguments for commands that sign in.
#[derive(clap::Args, Debug, Clone)]
struct CredentialArgs {
    /// Account email
    #[arg(long, env = "ROTA_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "ROTA_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in (falls back to creating the account)
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Manage the employee roster
    Employees {
        #[command(subcommand)]
        command: EmployeeCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum EmployeeCommands {
    /// Lists employees on the roster
    List {
        #[command(flatten)]
        credentials: CredentialArgs,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { credentials } => {
            let config = config::Config::load().context("load config")?;
            commands::login::run(&config, &credentials.email, &credentials.password).await
        }

        Commands::Employees { command } => match command {
            EmployeeCommands::List { credentials } => {
                let config = config::Config::load().context("load config")?;
                commands::employees::list(&config, &credentials.email, &credentials.password).await
            }
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
