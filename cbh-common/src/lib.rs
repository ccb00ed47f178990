//! Shared CLI bootstrap for the `cbh` binary.
//!
//! Holds the flag group that feeds the config builder and the tracing setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Flags describing the generated `server.json`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CliArgs {
    /// The port for CommandBox to run the application on
    #[clap(short = 'p', long, default_value = "0")]
    pub port: u16,

    /// The app name for CommandBox to use
    #[clap(short = 'n', long, default_value = "")]
    pub name: String,

    /// The host name, or address, for CommandBox to use
    #[clap(short = 'H', long, default_value = "")]
    pub host: String,

    /// Overwrite server.json file if found in directory
    #[clap(short = 'o', long)]
    pub overwrite: bool,
}

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to `warn`. Output goes to stderr so stdout
/// only carries the messages meant for the user.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
