//! Given steps for due-date scheduling BDD scenarios.

use super::world::{DueDateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwell::task::services::{
    ChangeStatusRequest, ClosedTaskPolicy, CreateTaskRequest, TaskServiceConfig,
};

#[given("closed tasks may change due dates")]
fn closed_tasks_may_change(world: &mut DueDateWorld) {
    let config = TaskServiceConfig::default().with_closed_task_policy(ClosedTaskPolicy::Allow);
    *world = DueDateWorld::with_config(config);
}

#[given(r#"a task named "{name}" due on "{due_date}""#)]
fn task_due_on(
    world: &mut DueDateWorld,
    name: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(name)
        .with_creation_date("2024-01-01")
        .with_due_date(due_date);
    let created = run_async(world.service.create_task(request))
        .wrap_err("create task for due-date scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(world: &mut DueDateWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let moved = run_async(
        world
            .service
            .change_status(ChangeStatusRequest::new(task_id, status)),
    )
    .wrap_err("change status in scenario setup")?;
    world.task = Some(moved);
    Ok(())
}
