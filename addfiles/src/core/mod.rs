//! Pure checker logic. Nothing here touches the filesystem.

pub mod guide;
pub mod manifest;
pub mod report;
