mod cli;
mod error;
mod logging;
mod settings;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use verinfo_core::{NotEnabledAction, registry};
use verinfo_platform::PlatformFacts;
use verinfo_report::{BuildInfoReporter, log_target_min_os, version_banner};

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::settings::AppSettings;

const NOT_COMPATIBLE: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            log::error!("{error}");
            eprintln!("verinfo: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let Some(command) = &cli.command else {
        Cli::command().print_long_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };
    logging::init_logging(
        settings.debug_logging || cli.verbose,
        settings.log_path().as_deref(),
        settings.max_log_size_bytes,
    );

    registry::global().enable_boxed(Box::new(settings.version_provider()?));
    let provider = registry::instance(NotEnabledAction::AllowUnfilled);
    let reporter = BuildInfoReporter::new(PlatformFacts::host(), settings.crypto.clone());

    match command {
        Commands::BuildInfo { pretty } => {
            let document = reporter.document(provider);
            let rendered = if *pretty {
                document.to_json_pretty()?
            } else {
                document.to_json()?
            };
            println!("{rendered}");
        }
        Commands::Version { binary } => {
            let binary = binary.as_deref().unwrap_or(env!("CARGO_PKG_NAME"));
            println!("{}", provider.make_version_string(binary));
        }
        Commands::Banner { binary } => println!("{}", version_banner(*binary, provider)),
        Commands::Check { peer_version } => {
            let compatible = provider.is_same_major_version(peer_version);
            log::debug!(
                "Peer version {peer_version} against {}: compatible={compatible}",
                provider.version()
            );
            if compatible {
                println!("compatible");
            } else {
                println!("incompatible");
                return Ok(ExitCode::from(NOT_COMPATIBLE));
            }
        }
        Commands::Log => {
            reporter.log_build_info(provider);
            log_target_min_os(provider);
        }
    }

    Ok(ExitCode::SUCCESS)
}
