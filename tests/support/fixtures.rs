//! Test fixtures and constants.

/// Complete default secrets file.
pub const SAMPLE_ENV: &str = "AUTH0_DOMAIN=example.com\nAUTH0_SCHEME=com.example.app\n";

/// Production secrets with different values.
pub const PRODUCTION_ENV: &str = "AUTH0_DOMAIN=prod.example.com\nAUTH0_SCHEME=com.example.app\n";

/// Secrets file with comments, padding and blank lines.
pub const SAMPLE_ENV_COMPLEX: &str = r#"
# Auth0 tenant
# AUTH0_DOMAIN=commented-out.example.com

   AUTH0_DOMAIN   =   padded.example.com   
AUTH0_SCHEME=com.example.app
AUTH0_DOMAIN=second.example.com
"#;

/// Complete signing properties with a relative keystore path.
pub const SAMPLE_SIGNING: &str = "\
storePassword=store-secret
keyPassword=key-secret
keyAlias=upload
storeFile=upload-keystore.jks
";

/// Signing properties without a keystore path.
pub const SIGNING_NO_STORE_FILE: &str = "keyAlias=upload\nstorePassword=store-secret\n";
