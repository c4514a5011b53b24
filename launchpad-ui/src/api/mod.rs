//! HTTP API access
//!
//! Client functions for the Launchpad REST API.

pub mod client;

pub use client::*;
