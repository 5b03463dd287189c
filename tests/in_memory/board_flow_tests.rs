//! Task lifecycle flows through [`BoardService`] backed by the in-memory
//! store.
//!
//! Exercises realistic board sessions end to end: creating and numbering
//! tasks, renaming, dragging between columns, deleting, and reloading the
//! whole board from the store.
//!
//! [`BoardService`]: triptych::board::services::BoardService

use crate::in_memory::helpers::{display_titles, load_service, runtime, seed_tasks, store};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;
use triptych::board::{
    adapters::memory::InMemoryBlobStore,
    domain::{DragEndEvent, DragLocation, DragOutcome, Status},
};

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn drag(source: (Status, usize), destination: (Status, usize)) -> DragEndEvent {
    DragEndEvent::new(
        DragLocation::new(source.0, source.1),
        Some(DragLocation::new(destination.0, destination.1)),
    )
}

/// Tests that freshly added tasks read as an unbroken numbered sequence.
#[rstest]
fn numbers_new_tasks_sequentially(
    runtime: io::Result<Runtime>,
    store: InMemoryBlobStore,
) -> TestResult {
    let rt = runtime?;
    let mut service = load_service(&rt, &store)?;

    seed_tasks(&rt, &mut service, Status::Pending, 3)?;

    assert_eq!(
        display_titles(&service, Status::Pending),
        vec!["Task 1", "Task 2", "Task 3"]
    );
    Ok(())
}

/// Tests that deleting a task renumbers the tasks behind it.
#[rstest]
fn renumbers_after_a_delete(
    runtime: io::Result<Runtime>,
    store: InMemoryBlobStore,
) -> TestResult {
    let rt = runtime?;
    let mut service = load_service(&rt, &store)?;
    let ids = seed_tasks(&rt, &mut service, Status::Pending, 3)?;

    let removed = rt.block_on(service.delete_task(Status::Pending, 0))?;

    assert_eq!(removed.map(|task| task.id()), ids.first().copied());
    assert_eq!(
        display_titles(&service, Status::Pending),
        vec!["Task 1", "Task 2"]
    );
    let expected_survivors: Vec<_> = ids.iter().skip(1).copied().collect();
    let survivors: Vec<_> = service
        .board()
        .column(Status::Pending)
        .tasks()
        .iter()
        .map(|task| task.id())
        .collect();
    assert_eq!(survivors, expected_survivors);
    Ok(())
}

/// Tests that dragging between columns preserves the total task count.
#[rstest]
fn moving_tasks_preserves_the_total_count(
    runtime: io::Result<Runtime>,
    store: InMemoryBlobStore,
) -> TestResult {
    let rt = runtime?;
    let mut service = load_service(&rt, &store)?;
    seed_tasks(&rt, &mut service, Status::Pending, 2)?;
    seed_tasks(&rt, &mut service, Status::InProgress, 1)?;

    let outcome = rt.block_on(service.handle_drag_end(drag(
        (Status::Pending, 1),
        (Status::InProgress, 0),
    )))?;

    assert!(matches!(outcome, DragOutcome::Moved { .. }));
    assert_eq!(service.board().task_count(), 3);
    assert_eq!(service.board().column(Status::Pending).len(), 1);
    assert_eq!(service.board().column(Status::InProgress).len(), 2);
    Ok(())
}

/// Tests that a renamed title survives drags and a full reload.
#[rstest]
fn renamed_titles_survive_moves_and_reloads(
    runtime: io::Result<Runtime>,
    store: InMemoryBlobStore,
) -> TestResult {
    let rt = runtime?;
    let mut service = load_service(&rt, &store)?;
    let ids = seed_tasks(&rt, &mut service, Status::Pending, 2)?;
    let renamed_id = ids.first().copied().ok_or("no seeded task")?;

    let applied = rt.block_on(service.rename_task(Status::Pending, 0, "Water the plants"))?;
    assert!(applied);
    rt.block_on(service.handle_drag_end(drag((Status::Pending, 0), (Status::Done, 0))))?;

    let reloaded = load_service(&rt, &store)?;
    let task = reloaded
        .board()
        .task_by_id(renamed_id)
        .ok_or("renamed task lost on reload")?;
    assert_eq!(task.custom_title(), Some("Water the plants"));
    assert_eq!(reloaded.board().locate(renamed_id), Some((Status::Done, 0)));
    assert_eq!(
        display_titles(&reloaded, Status::Pending),
        vec!["Task 1"]
    );
    Ok(())
}

/// Simulates a full working session and verifies the final board shape both
/// live and after a reload.
#[rstest]
fn a_full_session_round_trips_through_the_store(
    runtime: io::Result<Runtime>,
    store: InMemoryBlobStore,
) -> TestResult {
    let rt = runtime?;
    let mut service = load_service(&rt, &store)?;

    seed_tasks(&rt, &mut service, Status::Pending, 3)?;
    rt.block_on(service.rename_task(Status::Pending, 1, "Book the dentist"))?;
    rt.block_on(service.handle_drag_end(drag((Status::Pending, 1), (Status::InProgress, 0))))?;
    rt.block_on(service.handle_drag_end(drag((Status::InProgress, 0), (Status::Done, 0))))?;
    rt.block_on(service.delete_task(Status::Pending, 1))?;

    assert_eq!(display_titles(&service, Status::Pending), vec!["Task 1"]);
    assert!(display_titles(&service, Status::InProgress).is_empty());
    assert_eq!(
        display_titles(&service, Status::Done),
        vec!["Book the dentist"]
    );

    let reloaded = load_service(&rt, &store)?;
    assert_eq!(reloaded.board(), service.board());
    Ok(())
}

/// Tests that the inline-edit session renames through the service and the
/// result is what a fresh load observes.
#[rstest]
fn an_edit_session_renames_what_reloads_see(
    runtime: io::Result<Runtime>,
    store: InMemoryBlobStore,
) -> TestResult {
    let rt = runtime?;
    let mut service = load_service(&rt, &store)?;
    seed_tasks(&rt, &mut service, Status::InProgress, 1)?;

    assert!(service.begin_edit(Status::InProgress, 0));
    assert!(rt.block_on(service.rename_edited_task("Fix the gate latch"))?);
    service.end_edit();

    let reloaded = load_service(&rt, &store)?;
    assert_eq!(
        display_titles(&reloaded, Status::InProgress),
        vec!["Fix the gate latch"]
    );
    Ok(())
}
