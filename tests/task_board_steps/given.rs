//! Given steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.store.is_empty(), "scenario should start with no tasks");
    Ok(())
}

#[given(r#"the board holds task "{id}" titled "{title}" due "{deadline}""#)]
fn board_holds_task(world: &mut TaskBoardWorld, id: String, title: String, deadline: String) {
    let description = format!("{title} (seeded)");
    world.store.add_task(id, title, description, deadline);
}

#[given(
    r#"the form holds title "{title}", description "{description}" and deadline "{deadline}""#
)]
fn form_holds(world: &mut TaskBoardWorld, title: String, description: String, deadline: String) {
    world.form.set_title(title);
    world.form.set_description(description);
    world.form.set_deadline(deadline);
}
