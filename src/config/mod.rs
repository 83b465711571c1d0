//! Configuration module for game lookups
//!
//! This module provides the `LookupConfig` struct and its builder
//! for configuring lookups with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::LookupConfigBuilder;
pub use types::LookupConfig;
