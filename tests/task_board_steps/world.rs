//! Shared world state for task board BDD scenarios.

use std::cell::Cell;
use std::rc::Rc;

use rstest::fixture;
use taskboard::board::{
    adapters::view::{TaskInput, TaskInputError, TaskList},
    domain::{Task, TaskId, TaskStatus},
    services::TaskStore,
};

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub store: TaskStore,
    pub active: TaskList,
    pub finished: TaskList,
    pub form: TaskInput,
    pub notifications: Rc<Cell<usize>>,
    pub last_submission: Option<Result<TaskId, TaskInputError>>,
}

impl TaskBoardWorld {
    /// Creates a board with both lists attached and a notification counter.
    #[must_use]
    pub fn new() -> Self {
        let mut store = TaskStore::new();
        let finished = TaskList::attach(TaskStatus::Finished, &mut store);
        let active = TaskList::attach(TaskStatus::Active, &mut store);
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        store.subscribe(move |_: &[Task]| counter.set(counter.get() + 1));

        Self {
            store,
            active,
            finished,
            form: TaskInput::new(),
            notifications,
            last_submission: None,
        }
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Parses a status named in a scenario.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
