//! Constants used throughout buildcfg.
//!
//! Defaults mirror the layout of a Flutter project's `android/` directory,
//! which is the expected working directory.

/// Optional configuration file name, looked up in the project root.
pub const CONFIG_FILE: &str = ".buildcfg.toml";

/// Default secrets file, relative to the project root.
pub const ENV_FILE: &str = "../.env";

/// Production secrets file, relative to the project root.
pub const ENV_PRODUCTION_FILE: &str = "../.env.production";

/// Signing properties file, relative to the project root.
pub const SIGNING_FILE: &str = "key.properties";

/// Directory that relative `storeFile` paths are resolved against.
pub const KEYSTORE_BASE: &str = "app";

/// Environment variable holding the auth callback scheme.
pub const SCHEME_KEY: &str = "AUTH0_SCHEME";

/// Environment variable holding the auth domain.
pub const DOMAIN_KEY: &str = "AUTH0_DOMAIN";

/// Manifest placeholder receiving the scheme.
pub const SCHEME_PLACEHOLDER: &str = "auth0Scheme";

/// Manifest placeholder receiving the domain.
pub const DOMAIN_PLACEHOLDER: &str = "auth0Domain";

/// Signing property names, as written in `key.properties`.
pub mod signing {
    pub const STORE_FILE: &str = "storeFile";
    pub const STORE_PASSWORD: &str = "storePassword";
    pub const KEY_ALIAS: &str = "keyAlias";
    pub const KEY_PASSWORD: &str = "keyPassword";
}

/// Native libraries excluded from packaging.
///
/// These ship without 16 KB page alignment and would fail Play Store checks.
/// `libbarhopper_v3.so` is deliberately absent: barcode scanning needs it.
pub const JNI_EXCLUDES: &[&str] = &[
    "**/libimage_processing_util_jni.so",
    "**/libandroidx.graphics.path.so",
    "**/libdatastore_shared_counter.so",
    "**/libsurface_util_jni.so",
];

/// Environment variable controlling log filtering.
pub const LOG_ENV: &str = "BUILDCFG_LOG";
