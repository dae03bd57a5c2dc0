//! CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pixelforge_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use pixelforge_core::WorkflowConfig;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Upscale(args) => {
            let config = CliConfig::new(args.api_url.as_str())
                .with_timeout(args.timeout_secs.map(Duration::from_secs));
            let mut ctx = bootstrap(&config)?;
            let path =
                handlers::upscale::execute(&mut ctx, &args.files, args.resolution, &args.output_dir)
                    .await?;
            println!("{}", path.display());
        }
        Commands::Validate { file } => {
            let report = handlers::validate::execute(&file, &WorkflowConfig::default()).await?;
            println!(
                "{}: {}x{} {} ({} bytes) OK",
                report.name, report.width, report.height, report.mime_type, report.size
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads env-backed args
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !CliError::is_notified(&e) {
                eprintln!("Error: {e}");
            }
            let code = CliError::exit_code_for(&e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
