//! Compile-time constants for configuration

pub const TITLE_BASE: &str = "User Admin";
