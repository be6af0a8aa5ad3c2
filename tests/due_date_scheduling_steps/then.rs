//! Then steps for due-date scheduling BDD scenarios.

use super::world::{DueDateWorld, run_async};
use rstest_bdd_macros::then;
use taskwell::task::services::TaskLifecycleError;

#[then(r#"the active due date is "{due_date}""#)]
fn active_due_date_is(world: &DueDateWorld, due_date: String) -> Result<(), eyre::Report> {
    let active = run_async(world.service.active_due_date(world.task()?.id()))?
        .ok_or_else(|| eyre::eyre!("expected an active due date"))?;
    eyre::ensure!(
        active.due_date().to_string() == due_date,
        "expected active due date {due_date}, found {}",
        active.due_date()
    );
    Ok(())
}

#[then("the task has no active due date")]
fn no_active_due_date(world: &DueDateWorld) -> Result<(), eyre::Report> {
    let active = run_async(world.service.active_due_date(world.task()?.id()))?;
    eyre::ensure!(active.is_none(), "expected no active due date, found {active:?}");
    Ok(())
}

#[then(r#"the due date "{due_date}" is inactive"#)]
fn due_date_is_inactive(world: &DueDateWorld, due_date: String) -> Result<(), eyre::Report> {
    let record = run_async(world.service.due_date_on(world.task()?.id(), &due_date))?
        .ok_or_else(|| eyre::eyre!("no record for {due_date}"))?;
    eyre::ensure!(!record.is_active(), "{due_date} is still active");
    Ok(())
}

#[then("the due date history has {count:u64} records")]
fn history_has(world: &DueDateWorld, count: u64) -> Result<(), eyre::Report> {
    let history = run_async(world.service.due_date_history(world.task()?.id()))?;
    let expected = usize::try_from(count)?;
    eyre::ensure!(
        history.len() == expected,
        "expected {expected} records, found {}",
        history.len()
    );
    Ok(())
}

#[then("the due date change is rejected because the task is closed")]
fn change_rejected_as_closed(world: &DueDateWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_set_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing due date result"))?;

    if !matches!(result, Err(TaskLifecycleError::TaskClosed { .. })) {
        return Err(eyre::eyre!("expected TaskClosed error, got {result:?}"));
    }

    Ok(())
}
