//! The acting user of an operation.

use crate::directory::domain::{Role, User, UserId};
use serde::{Deserialize, Serialize};

/// Acting user paired with the role resolved for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    user_id: UserId,
    role: Role,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the role resolved for this request.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id().clone(), user.role())
    }
}
