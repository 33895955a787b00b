//! Signing command.

use crate::cli::output;
use crate::core::build::signing_json;
use crate::core::config::Config;
use crate::core::domain::identity::MASK;
use crate::core::domain::SigningIdentity;
use crate::core::signing::SigningSelector;
use crate::error::Result;

/// Show the signing identity the build will use.
pub fn execute(config: &Config, json: bool, show_secrets: bool) -> Result<()> {
    let identity = SigningSelector::from_config(config).select()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&signing_json(&identity, show_secrets))?
        );
        return Ok(());
    }

    print_identity(&identity, show_secrets);
    Ok(())
}

/// Print a signing identity as a text section.
pub fn print_identity(identity: &SigningIdentity, show_secrets: bool) {
    output::section("Signing");
    output::kv("config", identity.name());

    let Some(release) = identity.release() else {
        output::kv("keystore", output::dim("debug keystore"));
        return;
    };

    let secret = |value: Option<&str>| match value {
        Some(v) if show_secrets => v.to_string(),
        Some(_) => MASK.to_string(),
        None => output::dim("unset"),
    };

    output::kv("storeFile", output::path(&release.store_file().display().to_string()));
    output::kv("storePassword", secret(release.store_password()));
    output::kv(
        "keyAlias",
        release
            .key_alias()
            .map(String::from)
            .unwrap_or_else(|| output::dim("unset")),
    );
    output::kv("keyPassword", secret(release.key_password()));
}
