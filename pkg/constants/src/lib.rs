//! Centralized constants for the k8spin client.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod env;
pub mod network;
pub mod paths;
