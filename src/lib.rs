//! Triptych: state management for a three-column drag-and-drop Kanban board.
//!
//! This crate provides the core functionality for a board split into the
//! fixed columns *pending*, *in progress*, and *done*: creating, renaming,
//! and deleting tasks, reconciling drag-and-drop gestures into list
//! mutations, tracking the inline-edit session, and persisting the board
//! through a pluggable blob store.
//!
//! # Architecture
//!
//! Triptych follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and gesture reconciliation with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   directory-backed store)
//!
//! Rendering and gesture capture live outside this crate; callers feed the
//! board observed drag events and read column state back out.
//!
//! # Modules
//!
//! - [`board`]: Board state, drag reconciliation, edit session, persistence

pub mod board;
