use std::fmt;

use thiserror::Error;

/// Unique attribute involved in a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Nickname,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => f.write_str("email"),
            UniqueField::Nickname => f.write_str("nickname"),
        }
    }
}

/// Coarse classification used by transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Conflict,
    NotFound,
    Unauthorized,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a user with {field} [{value}] has already been created")]
    Conflict { field: UniqueField, value: String },
    #[error("a user with email [{email}] does not exist")]
    NotFound { email: String },
    #[error("the password is invalid, user [{email}] can't be updated")]
    Unauthorized { email: String },
    #[error("user store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    pub(crate) fn duplicate_email(email: &str) -> Self {
        StoreError::Conflict {
            field: UniqueField::Email,
            value: email.to_string(),
        }
    }

    pub(crate) fn duplicate_nickname(nickname: &str) -> Self {
        StoreError::Conflict {
            field: UniqueField::Nickname,
            value: nickname.to_string(),
        }
    }

    pub(crate) fn not_found(email: &str) -> Self {
        StoreError::NotFound {
            email: email.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Conflict { .. } => ErrorKind::Conflict,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Unauthorized { .. } => ErrorKind::Unauthorized,
            StoreError::LockPoisoned(_) => ErrorKind::Internal,
        }
    }
}
