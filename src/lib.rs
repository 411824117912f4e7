//! # Registry Paths Library
//!
//! This library enumerates every group, project and container registry
//! repository reachable under a root group of a GitLab-style platform, and
//! renders each record as an `"id: path"` line. It backs the `registry-paths`
//! command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use registry_paths::format::format_item;
//! use registry_paths::item::{dedup_items, Item};
//!
//! let items = dedup_items(vec![
//!     Item::new(617, "root"),
//!     Item::new(900, "sub/app"),
//!     Item::new(617, "root"),
//! ]);
//!
//! let lines: Vec<String> = items.iter().map(format_item).collect();
//! assert_eq!(lines, vec!["617: root", "900: sub/app"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`item`)**: typed `id` and `path` fields extracted from each JSON
//!   record, with the remaining fields kept for equality checks.
//! - **API Client (`client`)**: the `GroupApi` trait and its blocking HTTP
//!   implementation for the four group endpoints.
//! - **Traversal (`traversal`)**: the depth-first walk that aggregates the
//!   records of a group hierarchy, tolerating failures below the root.
//! - **Formatting (`format`)**: the `"id: path"` rendering.
//! - **Errors (`error`)**: the failure taxonomy and status-code mapping.

pub mod client;
pub mod defaults;
pub mod error;
pub mod format;
pub mod item;
pub mod traversal;

#[cfg(test)]
mod dedup_proptest;

/// Process exit codes used by the `registry-paths` binary.
///
/// - `0`: every line was printed (contained failures below the root are
///   reported on stderr but do not change the exit code)
/// - `1`: the enumeration failed, typically because the root group could not
///   be fetched
/// - `2`: invalid command-line usage (reported by clap)
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const USAGE: i32 = 2;
}
