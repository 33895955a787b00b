//! buildcfg - Resolve manifest placeholders and signing identities for
//! Android app builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Full build configuration (text, json, properties)
//! │   ├── get           # Single required value
//! │   ├── signing       # Signing identity
//! │   ├── check         # Diagnostics
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .buildcfg.toml management
//!     ├── domain/       # Env, Properties, SigningIdentity
//!     ├── lookup        # Injected environment access
//!     ├── resolver      # env > secrets file > fallback
//!     ├── signing       # Release vs debug selection
//!     └── build         # ResolvedBuild assembly
//! ```
//!
//! # Example
//!
//! ```no_run
//! use buildcfg::core::build::resolve_build;
//! use buildcfg::core::config::Config;
//! use buildcfg::core::lookup::ProcessEnv;
//!
//! let config = Config::load("android", None)?;
//! let build = resolve_build(&config, ProcessEnv)?;
//! println!("{}", build.placeholders["auth0Domain"]);
//! # Ok::<(), buildcfg::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::build::{resolve_build, ResolvedBuild};
pub use crate::core::config::Config;
pub use crate::core::domain::{ResolvedAuthConfig, SigningIdentity};
pub use crate::core::resolver::Resolver;
pub use error::{Error, Result};
