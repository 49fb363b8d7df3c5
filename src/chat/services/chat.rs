//! Service layer for posting and reading chat messages.

use crate::access::{AccessDenied, Actor, Operation, authorize};
use crate::chat::{
    domain::{ChatChannel, ChatDomainError, ChatMessage, DirectChannel},
    ports::{ChatRepository, ChatRepositoryError},
};
use crate::config::BoardConfig;
use crate::directory::{
    domain::{DirectoryDomainError, DirectorySnapshot, Team, TeamId, User, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError, RoleDirectory},
    services::load_snapshot,
};
use crate::error::ErrorKind;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for chat operations.
#[derive(Debug, Error)]
pub enum ChatServiceError {
    /// Message or channel validation failed.
    #[error(transparent)]
    Domain(#[from] ChatDomainError),
    /// The access policy rejected the operation.
    #[error(transparent)]
    PermissionDenied(#[from] AccessDenied),
    /// A referenced user or team does not resolve.
    #[error(transparent)]
    Directory(#[from] DirectoryDomainError),
    /// Directory lookup failed.
    #[error(transparent)]
    DirectoryRepository(#[from] DirectoryRepositoryError),
    /// Chat repository operation failed.
    #[error(transparent)]
    Repository(#[from] ChatRepositoryError),
}

impl ChatServiceError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::PermissionDenied(err) => err.kind(),
            Self::Directory(err) => err.kind(),
            Self::DirectoryRepository(err) => err.kind(),
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for chat service operations.
pub type ChatServiceResult<T> = Result<T, ChatServiceError>;

/// Direct and team chat orchestration service.
#[derive(Clone)]
pub struct ChatService<M, D, C>
where
    M: ChatRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    messages: Arc<M>,
    directory: Arc<D>,
    clock: Arc<C>,
    config: BoardConfig,
}

impl<M, D, C> ChatService<M, D, C>
where
    M: ChatRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new chat service with default limits.
    #[must_use]
    pub fn new(messages: Arc<M>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            messages,
            directory,
            clock,
            config: BoardConfig::default(),
        }
    }

    /// Replaces the message length limit source.
    #[must_use]
    pub const fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Sends a direct message from the acting user to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatDomainError::SelfConversation`] when messaging oneself,
    /// [`DirectoryDomainError::UnknownUser`] for an unknown recipient, and
    /// text validation errors.
    pub async fn send_direct(
        &self,
        acting: &UserId,
        recipient: &UserId,
        text: &str,
    ) -> ChatServiceResult<ChatMessage> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let sender = resolve_user(&snapshot, acting)?;
        resolve_user(&snapshot, recipient)?;
        let channel = DirectChannel::new(acting.clone(), recipient.clone())?;
        authorize(&Actor::from(sender), &Operation::PostDirect(&channel))?;

        self.post(ChatChannel::Direct(channel), sender, text).await
    }

    /// Posts a message to a team conversation. Only members may post.
    ///
    /// # Errors
    ///
    /// Returns [`ChatServiceError::PermissionDenied`] for non-members and
    /// [`DirectoryDomainError::UnknownTeam`] for an unknown team.
    pub async fn send_team(
        &self,
        acting: &UserId,
        team_id: TeamId,
        text: &str,
    ) -> ChatServiceResult<ChatMessage> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let sender = resolve_user(&snapshot, acting)?;
        let team = resolve_team(&snapshot, team_id)?;
        authorize(&Actor::from(sender), &Operation::PostTeam(team))?;

        self.post(ChatChannel::Team(team_id), sender, text).await
    }

    /// Returns the direct conversation between the acting user and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatDomainError::SelfConversation`] when `other` is the
    /// acting user.
    pub async fn history_direct(
        &self,
        acting: &UserId,
        other: &UserId,
    ) -> ChatServiceResult<Vec<ChatMessage>> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let reader = resolve_user(&snapshot, acting)?;
        let channel = DirectChannel::new(acting.clone(), other.clone())?;
        authorize(&Actor::from(reader), &Operation::ReadDirect(&channel))?;

        let messages = self
            .messages
            .list_channel(&ChatChannel::Direct(channel))
            .await?;
        debug!(acting = %acting, other = %other, count = messages.len(), "direct history loaded");
        Ok(messages)
    }

    /// Returns a team conversation. Members, managers and owners may read.
    ///
    /// # Errors
    ///
    /// Returns [`ChatServiceError::PermissionDenied`] for employees outside
    /// the team and [`DirectoryDomainError::UnknownTeam`] for an unknown
    /// team.
    pub async fn history_team(
        &self,
        acting: &UserId,
        team_id: TeamId,
    ) -> ChatServiceResult<Vec<ChatMessage>> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let reader = resolve_user(&snapshot, acting)?;
        let team = resolve_team(&snapshot, team_id)?;
        authorize(&Actor::from(reader), &Operation::ReadTeam(team))?;

        let messages = self.messages.list_channel(&ChatChannel::Team(team_id)).await?;
        debug!(acting = %acting, %team_id, count = messages.len(), "team history loaded");
        Ok(messages)
    }

    async fn post(
        &self,
        channel: ChatChannel,
        sender: &User,
        text: &str,
    ) -> ChatServiceResult<ChatMessage> {
        let message = ChatMessage::new(
            channel,
            sender,
            text,
            self.config.max_chat_message_chars,
            &*self.clock,
        )?;
        self.messages.append(&message).await?;
        info!(
            sender = %sender.id(),
            channel = %message.channel(),
            message_id = %message.id(),
            "chat message sent"
        );
        Ok(message)
    }
}

fn resolve_user<'a>(
    snapshot: &'a DirectorySnapshot,
    user_id: &UserId,
) -> Result<&'a User, DirectoryDomainError> {
    snapshot
        .user(user_id)
        .ok_or_else(|| DirectoryDomainError::UnknownUser(user_id.clone()))
}

fn resolve_team(snapshot: &DirectorySnapshot, team_id: TeamId) -> Result<&Team, DirectoryDomainError> {
    snapshot
        .teams()
        .iter()
        .find(|team| team.id() == team_id)
        .ok_or(DirectoryDomainError::UnknownTeam(team_id))
}
