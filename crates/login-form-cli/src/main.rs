mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use login_form::FormConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "login-form")]
#[command(version, about = "Validate and submit login credentials", long_about = None)]
struct Cli {
    /// Config file (defaults to $LOGIN_FORM_CONFIG, then ./login-form.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate credentials without submitting them
    Check {
        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,

        /// Print errors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one submission against the simulated backend
    Submit {
        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,

        #[arg(short, long)]
        remember_me: bool,

        /// Make the backend fail with this message
        #[arg(long)]
        fail_with: Option<String>,

        /// Override the simulated backend latency
        #[arg(long)]
        latency_ms: Option<u64>,
    },

    /// List validation rules in evaluation order
    Rules,
}

fn load_config(path: Option<PathBuf>) -> Result<FormConfig> {
    let path = path.or_else(|| std::env::var_os("LOGIN_FORM_CONFIG").map(PathBuf::from));
    match path {
        Some(path) => FormConfig::load(path),
        None => FormConfig::load_default(),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let passed = match cli.command {
        Commands::Check {
            email,
            password,
            json,
        } => commands::check::execute(config, email, password, json)?,
        Commands::Submit {
            email,
            password,
            remember_me,
            fail_with,
            latency_ms,
        } => {
            let request = commands::submit::SubmitRequest {
                email,
                password,
                remember_me,
                fail_with,
                latency_ms,
            };
            commands::submit::execute(config, request).await?
        }
        Commands::Rules => {
            commands::rules::execute(&config);
            true
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
