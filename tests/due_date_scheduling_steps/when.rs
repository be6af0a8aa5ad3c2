//! When steps for due-date scheduling BDD scenarios.

use super::world::{DueDateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the due date is set to "{due_date}""#)]
fn set_due_date(world: &mut DueDateWorld, due_date: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let result = run_async(world.service.set_due_date(task_id, &due_date));
    world.last_set_result = Some(result);
    Ok(())
}

#[when("the due date is cleared")]
fn clear_due_date(world: &mut DueDateWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.service.clear_due_date(task_id)).wrap_err("clear due date")?;
    Ok(())
}
