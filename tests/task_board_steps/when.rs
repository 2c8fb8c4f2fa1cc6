//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use taskboard::board::{
    adapters::view::{DragPayload, DragTarget},
    domain::TaskStatus,
};

#[when(r#"the task "{id}" titled "{title}" due "{deadline}" is added"#)]
fn task_is_added(world: &mut TaskBoardWorld, id: String, title: String, deadline: String) {
    let description = format!("{title} before the deadline");
    world.store.add_task(id, title, description, deadline);
}

#[when(r#"the task "{id}" is dropped on the "{status}" list"#)]
fn task_is_dropped(
    world: &mut TaskBoardWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let payload = DragPayload::text(id);
    let TaskBoardWorld {
        store,
        active,
        finished,
        ..
    } = world;
    let list = match target {
        TaskStatus::Active => active,
        TaskStatus::Finished => finished,
    };
    eyre::ensure!(list.drag_over(&payload), "list should accept a text payload");
    list.drop_payload(&payload, store);
    Ok(())
}

#[when("the form is submitted")]
fn form_is_submitted(world: &mut TaskBoardWorld) {
    let result = world.form.submit(&mut world.store, &DefaultClock);
    world.last_submission = Some(result);
}
