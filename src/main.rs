//! buildcfg - Resolve manifest placeholders and signing for Android builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use buildcfg::cli::{self, output, Cli};
use buildcfg::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("buildcfg=debug")
        } else {
            EnvFilter::new("buildcfg=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = cli::execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = cli::hint(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
