//! Sandbox path helpers.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin sandbox;
//! everything here translates between user-facing paths and sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
