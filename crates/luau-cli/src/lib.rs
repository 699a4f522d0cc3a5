//! Shared plumbing for the `luau-syntax-check` and `luau-fix` binaries.

pub mod logging;
