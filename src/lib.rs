//! Discord CLI: configuration front end for a Discord API SDK.
//!
//! A library for resolving layered bot configuration (YAML file, environment,
//! CLI overrides) and rendering views of it as JSON, YAML, or tables.

pub mod commands;
pub mod config;
pub mod output;
pub mod session;
