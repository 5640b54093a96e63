//! Pre-flight check for adding new source files to an Xcode project.
//!
//! The tool verifies that every file in a manifest exists under a base
//! directory, reports each one in order, and prints the manual steps for
//! adding them through Xcode when nothing is missing. The split mirrors the
//! rest of the workspace:
//!
//! - **[`core`]**: Pure logic (manifest rules, per-file results, instruction text).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files, filesystem metadata).
//!
//! [`check`] ties the two together and writes the report.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
