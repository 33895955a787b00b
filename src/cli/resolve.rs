//! Resolve command.
//!
//! Prints the full build configuration in the requested format.

use crate::cli::{output, Format};
use crate::core::build::{resolve_build, ResolvedBuild};
use crate::core::config::Config;
use crate::core::lookup::ProcessEnv;
use crate::error::Result;

/// Resolve and print the build configuration.
pub fn execute(config: &Config, format: Format, show_secrets: bool) -> Result<()> {
    let build = resolve_build(config, ProcessEnv)?;

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&build.to_json(show_secrets))?);
        }
        Format::Properties => print!("{}", build.to_properties(show_secrets)),
        Format::Text => print_text(&build, show_secrets),
    }

    Ok(())
}

fn print_text(build: &ResolvedBuild, show_secrets: bool) {
    output::section("Manifest placeholders");
    for (name, value) in &build.placeholders {
        output::kv(name, value);
    }

    crate::cli::signing::print_identity(&build.signing, show_secrets);

    output::section("Excluded native libraries");
    for glob in &build.jni_excludes {
        output::list_item(glob);
    }

    println!();
    let secrets = if build.production {
        "production secrets"
    } else {
        "default secrets"
    };
    output::success(&format!("resolved from {}", secrets));
}
