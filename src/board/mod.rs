//! Kanban board state management for Triptych.
//!
//! This module owns the complete lifecycle of a three-column board: task
//! creation with positional display titles, renaming and deletion,
//! splice-based reconciliation of drag-and-drop gestures, the inline-edit
//! session, and snapshot persistence through a blob-store port. The board
//! state is an explicit value owned by the caller (usually via
//! [`services::BoardService`]); nothing in this module reaches for global
//! state. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
