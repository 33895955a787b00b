//! Check command.
//!
//! Reports how each value resolves and flags signing problems that would
//! only surface later, at packaging time. Exits non-zero if any required
//! value fails to resolve.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::lookup::ProcessEnv;
use crate::core::resolver::Resolver;
use crate::core::signing::SigningSelector;
use crate::error::{ResolveError, Result};

/// Check the build configuration.
pub fn execute(config: &Config) -> Result<()> {
    let resolver = Resolver::new(config, ProcessEnv);
    let file = resolver.secrets_file();

    output::section("Secrets");
    let kind = if file.production { "production" } else { "default" };
    let state = if file.exists() { "" } else { " (missing)" };
    output::kv(
        "file",
        format!(
            "{} {}{}",
            output::path(&file.path.display().to_string()),
            output::dim(kind),
            state
        ),
    );

    let mut failed = 0;
    for key in [&config.auth.scheme_key, &config.auth.domain_key] {
        match resolver.resolve(key) {
            Ok(resolved) => {
                output::success(&format!("{} from {}", output::key(key), resolved.source))
            }
            Err(e) => {
                output::failure(&format!("{}: {}", output::key(key), e));
                failed += 1;
            }
        }
    }

    output::section("Signing");
    let identity = SigningSelector::from_config(config).select()?;
    match identity.release() {
        None => output::success("debug signing"),
        Some(release) => {
            output::success("release signing");
            let store_file = release.store_file().display().to_string();
            if !release.store_file_exists() {
                output::warn(&format!("keystore not found: {}", output::path(&store_file)));
            }
            for field in release.missing_fields() {
                output::warn(&format!("{} not set", output::key(field)));
            }
        }
    }

    // Details are already on stdout; the error only summarizes them
    if failed > 0 {
        return Err(ResolveError::Incomplete { failed }.into());
    }

    println!();
    output::success("build configuration resolves");
    Ok(())
}
