//! Then steps for task status transition BDD scenarios.

use super::world::{StatusTransitionWorld, run_async};
use rstest_bdd_macros::then;
use taskwell::task::{domain::TaskStatus, services::TaskLifecycleError};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &StatusTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let stored = run_async(world.service.get_task(world.task()?.id()))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }

    Ok(())
}

#[then(r#"the active due date is "{due_date}""#)]
fn active_due_date_is(
    world: &StatusTransitionWorld,
    due_date: String,
) -> Result<(), eyre::Report> {
    let active = run_async(world.service.active_due_date(world.task()?.id()))?
        .ok_or_else(|| eyre::eyre!("expected an active due date"))?;
    eyre::ensure!(
        active.due_date().to_string() == due_date,
        "expected active due date {due_date}, found {}",
        active.due_date()
    );
    Ok(())
}

#[then("the status change fails with an invalid transition error")]
fn change_fails_with_invalid_transition(
    world: &StatusTransitionWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidTransition(_))) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the status change fails with an invalid status error")]
fn change_fails_with_invalid_status(world: &StatusTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }

    Ok(())
}

#[then("the status change succeeds")]
fn change_succeeds(world: &StatusTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    if let Err(err) = result {
        return Err(eyre::eyre!("expected the status change to succeed, got {err:?}"));
    }

    Ok(())
}
