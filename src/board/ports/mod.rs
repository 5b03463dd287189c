//! Port contracts for board state management.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod store;

pub use store::{BlobStore, BlobStoreError, BlobStoreResult};
