//! When steps for task title BDD scenarios.

use super::world::{TaskTitlesWorld, parse_column, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use triptych::board::domain::{DragEndEvent, DragLocation, DragOutcome};

#[when(r#"a new task is added to "{status}""#)]
fn add_new_task(world: &mut TaskTitlesWorld, status: String) -> Result<(), eyre::Report> {
    let column = parse_column(&status)?;
    let _ = run_async(world.service.add_task(column)).wrap_err("add task in scenario")?;
    Ok(())
}

#[when(r#"the task at "{status}" {index:usize} is deleted"#)]
fn delete_task(
    world: &mut TaskTitlesWorld,
    status: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let column = parse_column(&status)?;
    let deleted = run_async(world.service.delete_task(column, index))
        .wrap_err("delete task in scenario")?;
    eyre::ensure!(deleted.is_some(), "delete target should exist in scenario");
    Ok(())
}

#[when(r#"an edit session opens on "{status}" {index:usize}"#)]
fn open_edit_session(
    world: &mut TaskTitlesWorld,
    status: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let column = parse_column(&status)?;
    let began = world.service.begin_edit(column, index);
    eyre::ensure!(began, "edit target should exist in scenario");
    Ok(())
}

#[when(r#""{title}" is typed into the edit field"#)]
fn type_into_edit_field(world: &mut TaskTitlesWorld, title: String) -> Result<(), eyre::Report> {
    let renamed = run_async(world.service.rename_edited_task(title))
        .wrap_err("rename the edited task in scenario")?;
    eyre::ensure!(renamed, "an edit session should be open in scenario");
    Ok(())
}

#[when("the edit field loses focus")]
fn edit_field_loses_focus(world: &mut TaskTitlesWorld) {
    world.service.end_edit();
}

#[when(r#"the task at "{status}" {index:usize} is dragged to "{target}" {target_index:usize}"#)]
fn drag_task(
    world: &mut TaskTitlesWorld,
    status: String,
    index: usize,
    target: String,
    target_index: usize,
) -> Result<(), eyre::Report> {
    let source = DragLocation::new(parse_column(&status)?, index);
    let destination = DragLocation::new(parse_column(&target)?, target_index);

    let outcome = run_async(
        world
            .service
            .handle_drag_end(DragEndEvent::new(source, Some(destination))),
    )
    .wrap_err("reconcile drag in scenario")?;

    eyre::ensure!(
        matches!(outcome, DragOutcome::Moved { .. }),
        "drag in scenario should move the task, got {outcome:?}"
    );
    Ok(())
}
