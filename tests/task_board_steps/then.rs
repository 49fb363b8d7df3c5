//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async, user_id};
use projectflow::error::ErrorKind;
use projectflow::task::domain::{Column, Priority, Task};
use rstest_bdd_macros::then;

fn expect_column(raw: &str) -> Result<Column, eyre::Report> {
    Column::try_from(raw).map_err(|err| eyre::eyre!("invalid expected column: {err}"))
}

fn expect_priority(raw: &str) -> Result<Priority, eyre::Report> {
    Priority::try_from(raw).map_err(|err| eyre::eyre!("invalid expected priority: {err}"))
}

/// Reloads the task from the repository as a user who can see every task.
fn stored_task(world: &TaskBoardWorld) -> Result<Task, eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.service.find_task(&user_id("mia")?, task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from repository"))
}

#[then(r#"the task is in column "{column}""#)]
fn task_in_column(world: &TaskBoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = expect_column(&column)?;
    let actual = world.task()?.column();
    eyre::ensure!(actual == expected, "expected column {expected}, found {actual}");
    Ok(())
}

#[then(r#"the stored task is in column "{column}""#)]
fn stored_task_in_column(world: &TaskBoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = expect_column(&column)?;
    let actual = stored_task(world)?.column();
    eyre::ensure!(actual == expected, "expected stored column {expected}, found {actual}");
    Ok(())
}

#[then(r#"the task priority is "{priority}""#)]
fn task_priority(world: &TaskBoardWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = expect_priority(&priority)?;
    let actual = world.task()?.priority();
    eyre::ensure!(actual == expected, "expected priority {expected}, found {actual}");
    Ok(())
}

#[then(r#"the stored task priority is "{priority}""#)]
fn stored_task_priority(world: &TaskBoardWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = expect_priority(&priority)?;
    let actual = stored_task(world)?.priority();
    eyre::ensure!(actual == expected, "expected stored priority {expected}, found {actual}");
    Ok(())
}

#[then(r#"the task assignee name is "{name}""#)]
fn assignee_name(world: &TaskBoardWorld, name: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.assignee_name();
    eyre::ensure!(
        actual == Some(name.as_str()),
        "expected assignee name {name}, found {actual:?}"
    );
    Ok(())
}

fn last_error_kind(world: &TaskBoardWorld) -> Result<ErrorKind, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) => Ok(err.kind()),
        Some(Ok(task)) => Err(eyre::eyre!("expected failure, got task {}", task.id())),
        None => Err(eyre::eyre!("missing operation result")),
    }
}

#[then("the operation fails with a permission error")]
fn fails_with_permission_error(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    eyre::ensure!(kind == ErrorKind::Permission, "expected permission error, got {kind}");
    Ok(())
}

#[then("the operation fails with a validation error")]
fn fails_with_validation_error(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    eyre::ensure!(kind == ErrorKind::Validation, "expected validation error, got {kind}");
    Ok(())
}
