//! Recognized environment variable names and their fallback defaults.

/// Listen port. Read but inert unless the port override is enabled.
pub const PORT: &str = "PORT";
/// Backing-service endpoint.
pub const SERVICE_BASE_URL: &str = "SERVICE_BASE_URL";
/// Public (anonymous) credential for the backing service.
pub const SERVICE_PUBLIC_KEY: &str = "SERVICE_PUBLIC_KEY";
/// Elevated-privilege credential for the backing service.
pub const SERVICE_PRIVILEGED_KEY: &str = "SERVICE_PRIVILEGED_KEY";
/// Token-signing secret.
pub const SIGNING_SECRET: &str = "SIGNING_SECRET";
/// Payment gateway credential.
pub const PAYMENT_PROVIDER_API_KEY: &str = "PAYMENT_PROVIDER_API_KEY";
/// Payment gateway collection identifier.
pub const PAYMENT_PROVIDER_COLLECTION_ID: &str = "PAYMENT_PROVIDER_COLLECTION_ID";
/// Externally advertised URL of this server.
pub const PUBLIC_SERVER_URL: &str = "PUBLIC_SERVER_URL";
/// Run mode selector (`development` or `production`).
pub const APP_ENV: &str = "APP_ENV";

/// Every variable the loader reads, in field order.
pub const ALL: [&str; 8] = [
    PORT,
    SERVICE_BASE_URL,
    SERVICE_PUBLIC_KEY,
    SERVICE_PRIVILEGED_KEY,
    SIGNING_SECRET,
    PAYMENT_PROVIDER_API_KEY,
    PAYMENT_PROVIDER_COLLECTION_ID,
    PUBLIC_SERVER_URL,
];

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVICE_BASE_URL: &str = "http://localhost:54321";
// Local development placeholders only. See `audit`.
pub const DEFAULT_SERVICE_PUBLIC_KEY: &str = "dev-public-key-change-me";
pub const DEFAULT_SIGNING_SECRET: &str = "dev-signing-secret-change-in-production";
pub const DEFAULT_PUBLIC_SERVER_URL: &str = "http://localhost:8080";
