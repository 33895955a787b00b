//! Domain types.

mod auth;
mod env;
pub mod identity;
mod properties;

pub use auth::ResolvedAuthConfig;
pub use env::Env;
pub use identity::{ReleaseIdentity, SigningIdentity};
pub use properties::Properties;
