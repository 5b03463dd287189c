//! Shared world state for board drag BDD scenarios.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use triptych::board::{
    adapters::memory::InMemoryBlobStore,
    domain::{DragOutcome, Status},
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBlobStore, DefaultClock>;

/// Scenario world for board drag behaviour tests.
pub struct BoardDragWorld {
    pub service: TestBoardService,
    pub store: InMemoryBlobStore,
    pub last_outcome: Option<DragOutcome>,
}

impl BoardDragWorld {
    /// Creates a world whose service persists to a fresh in-memory store.
    ///
    /// # Panics
    ///
    /// Panics if the initial load from the empty store fails.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryBlobStore::new();
        let service = run_async(BoardService::load(
            Arc::new(store.clone()),
            Arc::new(DefaultClock),
        ))
        .expect("loading from an empty store should succeed");

        Self {
            service,
            store,
            last_outcome: None,
        }
    }
}

impl Default for BoardDragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardDragWorld {
    BoardDragWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a column name taken from feature file text.
pub fn parse_column(name: &str) -> Result<Status, eyre::Report> {
    Status::try_from(name).map_err(|err| eyre::eyre!("invalid column name in scenario: {err}"))
}
