//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::board::{
    adapters::view::TaskField,
    domain::TaskId,
};

#[then(r#"the active list shows "{id}""#)]
fn active_list_shows(world: &TaskBoardWorld, id: String) -> Result<(), eyre::Report> {
    let shown = world.active.displayed_ids();
    eyre::ensure!(
        shown.contains(&TaskId::from(id.as_str())),
        "expected {id} in the active list, found {shown:?}"
    );
    Ok(())
}

#[then(r#"the finished list shows "{id}""#)]
fn finished_list_shows(world: &TaskBoardWorld, id: String) -> Result<(), eyre::Report> {
    let shown = world.finished.displayed_ids();
    eyre::ensure!(
        shown.contains(&TaskId::from(id.as_str())),
        "expected {id} in the finished list, found {shown:?}"
    );
    Ok(())
}

#[then("the active list is empty")]
fn active_list_is_empty(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let shown = world.active.displayed_ids();
    eyre::ensure!(shown.is_empty(), "expected no active tasks, found {shown:?}");
    Ok(())
}

#[then(r#"the task "{id}" has status "{status}""#)]
fn task_has_status(world: &TaskBoardWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world
        .store
        .get(&TaskId::from(id.as_str()))
        .ok_or_else(|| eyre::eyre!("task {id} is not on the board"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the board has sent {count:usize} notification rounds")]
fn notification_rounds(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let sent = world.notifications.get();
    eyre::ensure!(sent == count, "expected {count} notification rounds, got {sent}");
    Ok(())
}

#[then(r#"the submission is rejected for the "{field}" field"#)]
fn submission_rejected_for(world: &TaskBoardWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("the form was not submitted"))?;
    let Err(error) = result else {
        return Err(eyre::eyre!("expected a rejected submission, got {result:?}"));
    };
    let fields: Vec<&str> = error.fields().into_iter().map(TaskField::as_str).collect();
    eyre::ensure!(
        fields == vec![field.as_str()],
        "expected only {field} to fail, got {fields:?}"
    );
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.store.len() == count,
        "expected {count} tasks, found {}",
        world.store.len()
    );
    Ok(())
}

#[then("the form is cleared")]
fn form_is_cleared(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let form = &world.form;
    eyre::ensure!(
        form.title().is_empty() && form.description().is_empty() && form.deadline().is_empty(),
        "expected every form field to be empty"
    );
    Ok(())
}
