//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Vendor used for the platform directory layout.
pub const VENDOR: &str = "polymorphl";
