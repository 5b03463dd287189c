//! Application services for board orchestration.

mod board_service;

pub use board_service::{
    BoardService, BoardServiceError, BoardServiceResult, DEFAULT_STORAGE_KEY,
};
