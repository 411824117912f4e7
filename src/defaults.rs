//! Default values for registry-paths configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! API client, ensuring consistency and avoiding duplication.

/// Root group enumerated when `--group` is not given.
///
/// Can be overridden by the `--group` CLI flag or the
/// `REGISTRY_PATHS_GROUP` environment variable.
pub const DEFAULT_ROOT_GROUP: u64 = 617;

/// Log filter used when `--log-level` is not given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `User-Agent` header sent with every API request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
