//! Command-line support for the `oidconv` tool.

pub mod args;
