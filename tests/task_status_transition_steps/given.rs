//! Given steps for task status transition BDD scenarios.

use super::world::{StatusTransitionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwell::task::services::{ChangeStatusRequest, CreateTaskRequest};

#[given(r#"a task named "{name}" created on "{creation_date}""#)]
fn task_named(world: &mut StatusTransitionWorld, name: String, creation_date: String) {
    world.pending_request = Some(CreateTaskRequest::new(name).with_creation_date(creation_date));
}

#[given(r#"the task is due on "{due_date}""#)]
fn task_is_due_on(
    world: &mut StatusTransitionWorld,
    due_date: String,
) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    world.pending_request = Some(request.with_due_date(due_date));
    Ok(())
}

#[given("the task has been created")]
fn task_has_been_created(world: &mut StatusTransitionWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    let created = run_async(world.service.create_task(request))
        .wrap_err("create task for transition scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(
    world: &mut StatusTransitionWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let moved = run_async(
        world
            .service
            .change_status(ChangeStatusRequest::new(task_id, status)),
    )
    .wrap_err("change status in scenario setup")?;
    world.last_task = Some(moved);
    Ok(())
}
