//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async, user_id};
use eyre::WrapErr;
use mockable::DefaultClock;
use projectflow::directory::{
    domain::{Role, User},
    ports::DirectoryRepository,
};
use projectflow::task::{
    domain::{NewTask, Project},
    ports::ProjectRepository,
};
use rstest_bdd_macros::given;

#[given(r#"an employee "{id}" named "{name}""#)]
fn an_employee(world: &mut TaskBoardWorld, id: String, name: String) -> Result<(), eyre::Report> {
    store_user(world, &id, name, Role::Employee)
}

#[given(r#"a manager "{id}" named "{name}""#)]
fn a_manager(world: &mut TaskBoardWorld, id: String, name: String) -> Result<(), eyre::Report> {
    store_user(world, &id, name, Role::Manager)
}

fn store_user(
    world: &TaskBoardWorld,
    id: &str,
    name: String,
    role: Role,
) -> Result<(), eyre::Report> {
    let user = User::new(
        user_id(id)?,
        name,
        format!("{id}@example.com"),
        role,
        &DefaultClock,
    )?;
    run_async(world.directory.store_user(&user)).wrap_err("store scenario user")?;
    Ok(())
}

#[given(r#"a project "{name}""#)]
fn a_project(world: &mut TaskBoardWorld, name: String) -> Result<(), eyre::Report> {
    let project = Project::new(name, user_id("scenario")?, &DefaultClock)?;
    run_async(world.projects.store(&project)).wrap_err("store scenario project")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#""{creator}" created the task "{title}" assigned to "{assignee}""#)]
fn created_task(
    world: &mut TaskBoardWorld,
    creator: String,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let project_id = world
        .project
        .as_ref()
        .map(Project::id)
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let request = NewTask::new(title).with_assignee(user_id(&assignee)?);
    let task = run_async(
        world
            .service
            .create_task(&user_id(&creator)?, project_id, request),
    )
    .wrap_err("create scenario task")?;
    world.task = Some(task);
    Ok(())
}
