use serde::Serialize;

use crate::user::UserRecord;

pub const USER_ADD: &str = "user_add";
pub const USER_UPDATE: &str = "user_update";
pub const USER_DELETE: &str = "user_delete";

/// Notification describing a completed mutation.
///
/// Serializes as `{"topic": "user_add", "user": {..}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "topic", content = "user")]
pub enum DomainEvent {
    #[serde(rename = "user_add")]
    Created(UserRecord),
    #[serde(rename = "user_update")]
    Updated(UserRecord),
    /// Carries the record as it was before removal.
    #[serde(rename = "user_delete")]
    Deleted(UserRecord),
}

impl DomainEvent {
    pub fn topic(&self) -> &'static str {
        match self {
            DomainEvent::Created(_) => USER_ADD,
            DomainEvent::Updated(_) => USER_UPDATE,
            DomainEvent::Deleted(_) => USER_DELETE,
        }
    }

    pub fn user(&self) -> &UserRecord {
        match self {
            DomainEvent::Created(user) | DomainEvent::Updated(user) | DomainEvent::Deleted(user) => {
                user
            }
        }
    }
}
