//! End-to-end board flows across the directory, project and task services.

use super::helpers::{Workspace, runtime, workspace};
use projectflow::directory::{domain::Role, services::RegisterUserRequest};
use projectflow::error::ErrorKind;
use projectflow::task::{
    domain::{Column, NewTask, Priority, Project, TaskPatch},
    ports::FileUpload,
};
use rstest::rstest;
use tokio::runtime::Runtime;

#[rstest]
fn first_sign_up_becomes_owner_and_later_ones_employees(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (owner, _, eve, _) = workspace.staffed().await;
        assert_eq!(
            workspace.directory.role_of(&owner).await.expect("owner resolves"),
            Role::Owner
        );

        let late = workspace
            .directory
            .sign_up(RegisterUserRequest::new("lars", "Lars Holm", "lars@example.com"))
            .await
            .expect("sign-up succeeds");
        assert_eq!(late.role(), Role::Employee);
        assert_eq!(
            workspace.directory.role_of(&eve).await.expect("eve resolves"),
            Role::Employee
        );
    });
}

#[rstest]
fn assignee_and_manager_share_one_task_through_the_board(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (_, manager, eve, finn) = workspace.staffed().await;
        let project = workspace
            .projects
            .create_project(&manager, "Launch")
            .await
            .expect("managers create projects");
        workspace
            .projects
            .assign_user(&manager, project.id(), &eve)
            .await
            .expect("managers assign users");

        let task = workspace
            .tasks
            .create_task(
                &manager,
                project.id(),
                NewTask::new("Write release notes").with_assignee(eve.clone()),
            )
            .await
            .expect("managers create tasks");

        let done = workspace
            .tasks
            .move_task(&eve, task.id(), Column::Done)
            .await
            .expect("assignee moves own task");
        assert_eq!(done.column(), Column::Done);

        let prioritised = workspace
            .tasks
            .update_fields(&manager, task.id(), &TaskPatch::new().with_priority(Priority::High))
            .await
            .expect("managers edit fields");
        assert_eq!(prioritised.priority(), Priority::High);
        assert_eq!(prioritised.column(), Column::Done);

        let denied = workspace
            .tasks
            .move_task(&finn, task.id(), Column::Ongoing)
            .await
            .expect_err("bystanders cannot move the task");
        assert_eq!(denied.kind(), ErrorKind::Permission);

        let eve_board = workspace
            .tasks
            .board(&eve, project.id())
            .await
            .expect("board loads");
        assert_eq!(eve_board.tasks_in(Column::Done).len(), 1);

        let finn_board = workspace
            .tasks
            .board(&finn, project.id())
            .await
            .expect("board loads");
        assert!(finn_board.is_empty());
    });
}

#[rstest]
fn employees_see_only_projects_they_work_on(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (owner, manager, eve, finn) = workspace.staffed().await;
        let launch = workspace
            .projects
            .create_project(&manager, "Launch")
            .await
            .expect("project created");
        let research = workspace
            .projects
            .create_project(&owner, "Research")
            .await
            .expect("project created");
        workspace
            .projects
            .assign_user(&manager, launch.id(), &eve)
            .await
            .expect("assignment succeeds");
        workspace
            .tasks
            .create_task(
                &owner,
                research.id(),
                NewTask::new("Survey users").with_assignee(finn.clone()),
            )
            .await
            .expect("task created");

        let eve_projects = workspace
            .projects
            .visible_projects(&eve)
            .await
            .expect("projects listed");
        let finn_projects = workspace
            .projects
            .visible_projects(&finn)
            .await
            .expect("projects listed");
        let manager_projects = workspace
            .projects
            .visible_projects(&manager)
            .await
            .expect("projects listed");

        assert_eq!(eve_projects.len(), 1);
        assert_eq!(eve_projects.first().map(Project::id), Some(launch.id()));
        assert_eq!(finn_projects.first().map(Project::id), Some(research.id()));
        assert_eq!(manager_projects.len(), 2);
    });
}

#[rstest]
fn uploaded_attachments_land_in_storage(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (_, manager, eve, _) = workspace.staffed().await;
        let project = workspace
            .projects
            .create_project(&manager, "Launch")
            .await
            .expect("project created");
        let task = workspace
            .tasks
            .create_task(
                &manager,
                project.id(),
                NewTask::new("Design logo").with_assignee(eve.clone()),
            )
            .await
            .expect("task created");

        let updated = workspace
            .tasks
            .attach_file(&eve, task.id(), FileUpload::new("logo.svg", b"<svg/>".to_vec()))
            .await
            .expect("anyone attaches");
        let attachment = updated.attachments().first().expect("attachment recorded");

        assert_eq!(attachment.uploaded_by(), &eve);
        assert_eq!(attachment.file().file_name(), "logo.svg");
        assert_eq!(
            workspace.storage.get(attachment.file().url()),
            Some(b"<svg/>".to_vec())
        );
    });
}

#[rstest]
fn role_changes_apply_to_the_next_task_operation(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (owner, manager, eve, _) = workspace.staffed().await;
        let project = workspace
            .projects
            .create_project(&manager, "Launch")
            .await
            .expect("project created");

        let denied = workspace
            .tasks
            .create_task(&eve, project.id(), NewTask::new("Plan sprint"))
            .await
            .expect_err("employees cannot create tasks");
        assert_eq!(denied.kind(), ErrorKind::Permission);

        workspace
            .directory
            .change_role(&owner, &eve, Role::Manager)
            .await
            .expect("owner promotes eve");
        let task = workspace
            .tasks
            .create_task(&eve, project.id(), NewTask::new("Plan sprint"))
            .await
            .expect("promoted users create tasks");
        assert_eq!(task.created_by(), &eve);
    });
}
