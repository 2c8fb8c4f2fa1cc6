//! End-to-end tests for the task board through its public API.

use std::cell::RefCell;
use std::rc::Rc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::board::{
    adapters::view::{DragTarget, Draggable, TaskInput, TaskList},
    domain::{Task, TaskId, TaskStatus, Validatable},
    services::{StatusChange, TaskStore},
    validation::validate,
};

type Snapshots = Rc<RefCell<Vec<Vec<(String, TaskStatus)>>>>;

#[fixture]
fn observed_store() -> (TaskStore, Snapshots) {
    let mut store = TaskStore::new();
    let snapshots: Snapshots = Rc::default();
    let sink = Rc::clone(&snapshots);
    store.subscribe(move |tasks: &[Task]| {
        sink.borrow_mut().push(
            tasks
                .iter()
                .map(|task| (task.id().to_string(), task.status()))
                .collect(),
        );
    });
    (store, snapshots)
}

#[rstest]
fn add_then_finish_then_ignore_unknown(observed_store: (TaskStore, Snapshots)) -> eyre::Result<()> {
    let (mut store, snapshots) = observed_store;

    store.add_task("t1", "Buy milk", "Get milk from store", "2999-01-01");
    eyre::ensure!(
        snapshots.borrow().last() == Some(&vec![("t1".to_owned(), TaskStatus::Active)]),
        "expected t1 to be active after creation"
    );

    let changed = store.change_status(&TaskId::from("t1"), TaskStatus::Finished);
    eyre::ensure!(changed == StatusChange::Changed, "expected a status change");
    eyre::ensure!(
        snapshots.borrow().last() == Some(&vec![("t1".to_owned(), TaskStatus::Finished)]),
        "expected t1 to be finished"
    );

    let rounds_before = snapshots.borrow().len();
    let ignored = store.change_status(&TaskId::from("unknown"), TaskStatus::Finished);
    eyre::ensure!(ignored == StatusChange::NotFound, "unknown id must be ignored");
    eyre::ensure!(
        snapshots.borrow().len() == rounds_before,
        "unknown id must not notify"
    );

    let task = store
        .get(&TaskId::from("t1"))
        .ok_or_else(|| eyre::eyre!("t1 missing"))?;
    eyre::ensure!(task.title() == "Buy milk", "title must be unchanged");
    eyre::ensure!(
        task.description() == "Get milk from store",
        "description must be unchanged"
    );
    Ok(())
}

#[rstest]
fn far_future_deadline_validates_against_the_system_clock() {
    let request = Validatable::new("2999-01-01").required().must_be_future_date();
    assert!(validate(&request, &DefaultClock));
}

#[rstest]
fn form_submission_flows_through_to_both_lists() -> eyre::Result<()> {
    let mut store = TaskStore::new();
    let mut finished = TaskList::attach(TaskStatus::Finished, &mut store);
    let active = TaskList::attach(TaskStatus::Active, &mut store);
    let mut form = TaskInput::new();

    form.set_title("Write report");
    form.set_description("Quarterly numbers");
    form.set_deadline("2999-06-30");
    let id = form.submit(&mut store, &DefaultClock)?;

    eyre::ensure!(active.displayed_ids() == vec![id.clone()], "task should be active");

    let item = active
        .items()
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("missing active row"))?;
    let payload = item.drag_start();
    eyre::ensure!(finished.drag_over(&payload), "finished list should accept text");
    finished.drop_payload(&payload, &mut store);

    eyre::ensure!(finished.displayed_ids() == vec![id], "task should be finished");
    eyre::ensure!(active.displayed_tasks().is_empty(), "active list should be empty");
    Ok(())
}
