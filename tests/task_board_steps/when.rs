//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async, user_id};
use projectflow::task::domain::{Column, Priority, TaskPatch};
use rstest_bdd_macros::when;

#[when(r#""{actor}" moves the task to "{column}""#)]
fn move_task(world: &mut TaskBoardWorld, actor: String, column: String) -> Result<(), eyre::Report> {
    let target = Column::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let task_id = world.task()?.id();
    let result = run_async(world.service.move_task(&user_id(&actor)?, task_id, target));
    world.record(result);
    Ok(())
}

#[when(r#""{actor}" sets the task priority to "{priority}""#)]
fn set_priority(
    world: &mut TaskBoardWorld,
    actor: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let parsed = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let task_id = world.task()?.id();
    let patch = TaskPatch::new().with_priority(parsed);
    let result = run_async(
        world
            .service
            .update_fields(&user_id(&actor)?, task_id, &patch),
    );
    world.record(result);
    Ok(())
}

#[when(r#""{actor}" reassigns the task to "{assignee}""#)]
fn reassign(
    world: &mut TaskBoardWorld,
    actor: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let patch = TaskPatch::new().with_assignee(Some(user_id(&assignee)?));
    let result = run_async(
        world
            .service
            .update_fields(&user_id(&actor)?, task_id, &patch),
    );
    world.record(result);
    Ok(())
}

#[when(r#""{actor}" comments "{text}""#)]
fn comment(world: &mut TaskBoardWorld, actor: String, text: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let result = run_async(world.service.add_comment(&user_id(&actor)?, task_id, &text));
    world.record(result);
    Ok(())
}
