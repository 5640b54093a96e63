//! Stable exit codes for the addfiles CLI.

/// Every manifest file exists; instructions were printed.
pub const OK: i32 = 0;
/// At least one manifest file is missing or could not be inspected.
pub const MISSING: i32 = 1;
/// Invalid configuration, arguments, or an output failure.
pub const INVALID: i32 = 2;
