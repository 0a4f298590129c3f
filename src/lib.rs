//! Beadboard - turn images into bead boards
//!
//! Image loading, rendering and the HTTP API around the `bead-grid` core.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
