//! Unit tests for board state management.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
