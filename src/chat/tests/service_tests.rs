//! Orchestration tests for [`ChatService`].

use std::sync::Arc;

use crate::chat::{
    adapters::memory::InMemoryChatRepository,
    domain::ChatDomainError,
    services::{ChatService, ChatServiceError},
};
use crate::config::BoardConfig;
use crate::directory::{
    adapters::memory::InMemoryDirectoryRepository,
    domain::{DirectoryDomainError, Role, Team, TeamId, User, UserId},
    ports::DirectoryRepository,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = ChatService<InMemoryChatRepository, InMemoryDirectoryRepository, DefaultClock>;

struct Harness {
    service: TestService,
    team_id: TeamId,
}

fn uid(value: &str) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// `eve` and `finn` share the Platform team; `gia` is an employee outside
/// it and `mia` a manager outside it.
#[fixture]
async fn harness() -> Harness {
    let directory = Arc::new(InMemoryDirectoryRepository::new());
    for (id, role) in [
        ("eve", Role::Employee),
        ("finn", Role::Employee),
        ("gia", Role::Employee),
        ("mia", Role::Manager),
    ] {
        let user = User::new(uid(id), id, format!("{id}@example.com"), role, &DefaultClock)
            .expect("valid user");
        directory.store_user(&user).await.expect("store user");
    }
    let mut team = Team::new("Platform", &DefaultClock).expect("valid team");
    team.add_member(uid("eve"), &DefaultClock).expect("add eve");
    team.add_member(uid("finn"), &DefaultClock).expect("add finn");
    directory.store_team(&team).await.expect("store team");

    let service = ChatService::new(
        Arc::new(InMemoryChatRepository::new()),
        directory,
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        team_id: team.id(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn direct_history_is_shared_by_both_participants(#[future(awt)] harness: Harness) {
    harness
        .service
        .send_direct(&uid("eve"), &uid("finn"), "hi finn")
        .await
        .expect("send");
    harness
        .service
        .send_direct(&uid("finn"), &uid("eve"), "hi eve")
        .await
        .expect("reply");

    let from_eve = harness
        .service
        .history_direct(&uid("eve"), &uid("finn"))
        .await
        .expect("history");
    let from_finn = harness
        .service
        .history_direct(&uid("finn"), &uid("eve"))
        .await
        .expect("history");

    assert_eq!(from_eve, from_finn);
    let texts: Vec<&str> = from_eve.iter().map(|message| message.text()).collect();
    assert_eq!(texts, ["hi finn", "hi eve"]);

    let outsider = harness
        .service
        .history_direct(&uid("gia"), &uid("eve"))
        .await
        .expect("history");
    assert!(outsider.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn messaging_yourself_or_unknown_users_fails(#[future(awt)] harness: Harness) {
    let to_self = harness
        .service
        .send_direct(&uid("eve"), &uid("eve"), "note to self")
        .await;
    assert!(matches!(
        to_self,
        Err(ChatServiceError::Domain(ChatDomainError::SelfConversation(_)))
    ));

    let to_ghost = harness
        .service
        .send_direct(&uid("eve"), &uid("ghost"), "boo")
        .await;
    assert!(matches!(
        to_ghost,
        Err(ChatServiceError::Directory(DirectoryDomainError::UnknownUser(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_members_post_to_team_channel(#[future(awt)] harness: Harness) {
    harness
        .service
        .send_team(&uid("eve"), harness.team_id, "deploy done")
        .await
        .expect("member posts");

    for outsider in ["gia", "mia"] {
        let result = harness
            .service
            .send_team(&uid(outsider), harness.team_id, "let me in")
            .await;
        assert!(matches!(result, Err(ChatServiceError::PermissionDenied(_))));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn managers_read_any_team_channel(#[future(awt)] harness: Harness) {
    harness
        .service
        .send_team(&uid("finn"), harness.team_id, "retro at 4")
        .await
        .expect("member posts");

    let manager_view = harness
        .service
        .history_team(&uid("mia"), harness.team_id)
        .await
        .expect("manager reads");
    assert_eq!(manager_view.len(), 1);

    let outsider = harness
        .service
        .history_team(&uid("gia"), harness.team_id)
        .await;
    assert!(matches!(outsider, Err(ChatServiceError::PermissionDenied(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_team_is_not_found(#[future(awt)] harness: Harness) {
    let result = harness
        .service
        .send_team(&uid("eve"), TeamId::new(), "hello?")
        .await;
    assert!(matches!(
        result,
        Err(ChatServiceError::Directory(DirectoryDomainError::UnknownTeam(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_length_limit_applies(#[future(awt)] harness: Harness) {
    let service = harness
        .service
        .with_config(BoardConfig::default().with_max_chat_message_chars(5));

    let result = service
        .send_team(&uid("eve"), harness.team_id, "too long")
        .await;
    assert!(matches!(
        result,
        Err(ChatServiceError::Domain(ChatDomainError::MessageTooLong {
            max: 5,
            actual: 8
        }))
    ));
}
