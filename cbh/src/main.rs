//! `cbh`: CommandBox `server.json` helper.
//!
//! Builds a `server.json` from flags and writes it into `PATH`, asking before
//! replacing an existing file unless `--overwrite` is given.

use cbh_common::CliArgs;
use cbh_core::error::EXIT_FAULT;
use cbh_core::{CbhError, ConfigOptions, ConfigWriter, LinePrompt, ServerConfig, WriteOutcome};
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cbh", version, about = "CommandBox server.json helper")]
struct Cli {
    #[clap(flatten)]
    args: CliArgs,

    /// The destination to make the file
    #[clap(
        value_name = "PATH",
        default_value = ".",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    destination: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cbh_common::init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            let code = err
                .downcast_ref::<CbhError>()
                .map(CbhError::exit_code)
                .unwrap_or(EXIT_FAULT);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ServerConfig::from_options(&config_options(&cli.args));
    tracing::debug!(?config, destination = %cli.destination.display(), "Built configuration");
    let json = config.to_json()?;

    let writer = ConfigWriter::new(&cli.destination).overwrite(cli.args.overwrite);
    match writer.write(&json, &mut LinePrompt::stdio())? {
        WriteOutcome::Written(path) => {
            println!("server.json file successfully created at {}", path.display());
        }
        WriteOutcome::Cancelled => {
            println!("Exiting...");
        }
    }

    Ok(())
}

fn config_options(args: &CliArgs) -> ConfigOptions {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    ConfigOptions {
        name: non_empty(args.name.as_str()),
        host: non_empty(args.host.as_str()),
        port: args.port,
    }
}
