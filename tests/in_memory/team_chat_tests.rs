//! Team management, chat and account removal across services.

use super::helpers::{Workspace, runtime, workspace};
use projectflow::chat::domain::ChatMessage;
use projectflow::error::ErrorKind;
use projectflow::task::domain::NewTask;
use rstest::rstest;
use tokio::runtime::Runtime;

#[rstest]
fn team_members_chat_and_outsiders_are_refused(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (_, manager, eve, finn) = workspace.staffed().await;
        let team = workspace
            .directory
            .create_team(&manager, "Platform")
            .await
            .expect("managers create teams");
        workspace
            .directory
            .add_team_member(&manager, team.id(), &eve)
            .await
            .expect("member added");

        workspace
            .chat
            .send_team(&eve, team.id(), "Standup in five")
            .await
            .expect("members post");
        let denied = workspace
            .chat
            .send_team(&finn, team.id(), "Can I join?")
            .await
            .expect_err("outsiders cannot post");
        assert_eq!(denied.kind(), ErrorKind::Permission);

        let history = workspace
            .chat
            .history_team(&manager, team.id())
            .await
            .expect("managers read team chat");
        assert_eq!(history.len(), 1);
        assert_eq!(history.first().map(ChatMessage::sender_name), Some("Eve Adams"));
    });
}

#[rstest]
fn direct_messages_are_shared_by_both_participants(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (_, _, eve, finn) = workspace.staffed().await;
        workspace
            .chat
            .send_direct(&eve, &finn, "Lunch?")
            .await
            .expect("direct message sent");
        workspace
            .chat
            .send_direct(&finn, &eve, "Sure")
            .await
            .expect("reply sent");

        let seen_by_eve = workspace
            .chat
            .history_direct(&eve, &finn)
            .await
            .expect("history loads");
        let seen_by_finn = workspace
            .chat
            .history_direct(&finn, &eve)
            .await
            .expect("history loads");

        let texts: Vec<&str> = seen_by_eve.iter().map(ChatMessage::text).collect();
        assert_eq!(texts, vec!["Lunch?", "Sure"]);
        assert_eq!(seen_by_eve, seen_by_finn);
    });
}

#[rstest]
fn deleting_a_user_removes_account_and_memberships(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (owner, manager, eve, _) = workspace.staffed().await;
        let team = workspace
            .directory
            .create_team(&manager, "Platform")
            .await
            .expect("team created");
        workspace
            .directory
            .add_team_member(&manager, team.id(), &eve)
            .await
            .expect("member added");

        workspace
            .directory
            .delete_user(&owner, &eve)
            .await
            .expect("owner deletes eve");

        assert!(workspace.identity.is_deleted(&eve));
        let members = workspace
            .directory
            .members_of(team.id())
            .await
            .expect("team resolves");
        assert!(members.is_empty());
        let lookup = workspace
            .directory
            .role_of(&eve)
            .await
            .expect_err("deleted users no longer resolve");
        assert_eq!(lookup.kind(), ErrorKind::NotFound);
    });
}

#[rstest]
fn deleting_an_assignee_leaves_their_tasks_unassigned(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (owner, manager, eve, _) = workspace.staffed().await;
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
                NewTask::new("Write release notes").with_assignee(eve.clone()),
            )
            .await
            .expect("task created");

        workspace
            .directory
            .delete_user(&owner, &eve)
            .await
            .expect("owner deletes eve");

        let stored = workspace
            .tasks
            .find_task(&manager, task.id())
            .await
            .expect("lookup succeeds")
            .expect("task survives the deletion");
        assert_eq!(stored.assignee_id(), None);
        assert_eq!(stored.assignee_name(), None);
        assert!(stored.updated_at() >= task.updated_at());
        let leftover = workspace
            .tasks
            .board(&manager, project.id())
            .await
            .expect("board loads");
        assert!(
            leftover
                .columns()
                .iter()
                .flat_map(|column| column.tasks())
                .all(|listed| listed.assignee_id() != Some(&eve))
        );
    });
}

#[rstest]
fn owners_cannot_delete_themselves(runtime: Runtime, workspace: Workspace) {
    runtime.block_on(async {
        let (owner, _, _, _) = workspace.staffed().await;
        let err = workspace
            .directory
            .delete_user(&owner, &owner)
            .await
            .expect_err("self deletion is refused");
        assert_eq!(err.kind(), ErrorKind::Permission);
        assert!(!workspace.identity.is_deleted(&owner));
    });
}
