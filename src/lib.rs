//! Purpose: Library crate behind the `kvctl` CLI and its tests.
//! Exports: `api` (config, payload, HTTP client, read/write operations, errors).
//! Invariants: Operations take their configuration as an explicit argument; no global state.
pub mod api;
mod core;
