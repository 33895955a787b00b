//! Get command.
//!
//! Resolves one required value and prints it bare, for use in scripts.

use crate::core::config::Config;
use crate::core::lookup::ProcessEnv;
use crate::core::resolver::Resolver;
use crate::error::Result;

/// Print the resolved value of `key`.
pub fn execute(config: &Config, key: &str) -> Result<()> {
    let value = Resolver::new(config, ProcessEnv).resolve_required(key)?;
    println!("{}", value);
    Ok(())
}
