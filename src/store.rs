//! UserStore - the in-memory source of truth for users.
//!
//! One reader/writer lock guards a single map from email to an entry holding
//! both the typed record and its filterable projection, so the two can never
//! be observed out of step. Business checks (email and nickname uniqueness on
//! create, password equality on update) run under the write lock, and the
//! resulting event is handed to the sink only after the lock is released.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::criteria::Filter;
use crate::emitter::{EventSink, NoopSink};
use crate::error::StoreError;
use crate::event::DomainEvent;
use crate::projection::FilterableProjection;
use crate::user::UserRecord;

struct Entry {
    record: UserRecord,
    projection: FilterableProjection,
}

impl Entry {
    fn new(record: UserRecord) -> Self {
        let projection = FilterableProjection::rebuild(&record);
        Self { record, projection }
    }
}

/// Keyed by email, in insertion order.
type Entries = IndexMap<String, Entry>;

pub struct UserStore<S = NoopSink> {
    entries: RwLock<Entries>,
    sink: S,
}

impl Default for UserStore<NoopSink> {
    fn default() -> Self {
        Self::new(NoopSink)
    }
}

impl<S: EventSink> UserStore<S> {
    pub fn new(sink: S) -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Store a new user. Fails if the email or the nickname is already taken.
    pub fn create(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        {
            let mut entries = self.write("create")?;

            if entries.contains_key(record.email()) {
                warn!(email = record.email(), "user not created: email already registered");
                return Err(StoreError::duplicate_email(record.email()));
            }

            if entries
                .values()
                .any(|entry| entry.record.nickname() == record.nickname())
            {
                warn!(
                    email = record.email(),
                    nickname = record.nickname(),
                    "user not created: nickname already taken"
                );
                return Err(StoreError::duplicate_nickname(record.nickname()));
            }

            entries.insert(record.email().to_string(), Entry::new(record.clone()));
        }

        debug!(email = record.email(), "user created");
        self.sink.emit(DomainEvent::Created(record.clone()));
        Ok(record)
    }

    /// Replace an existing user wholesale.
    ///
    /// The supplied password must equal the stored one. Nickname uniqueness
    /// is not checked here, so an update can take a nickname already used by
    /// another user.
    pub fn update(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        {
            let mut entries = self.write("update")?;

            let Some(entry) = entries.get_mut(record.email()) else {
                warn!(email = record.email(), "user not updated: no such user");
                return Err(StoreError::not_found(record.email()));
            };

            if entry.record.password() != record.password() {
                warn!(email = record.email(), "user not updated: password mismatch");
                return Err(StoreError::Unauthorized {
                    email: record.email().to_string(),
                });
            }

            *entry = Entry::new(record.clone());
        }

        debug!(email = record.email(), "user updated");
        self.sink.emit(DomainEvent::Updated(record.clone()));
        Ok(record)
    }

    /// Remove a user. Returns `true` once removed.
    pub fn delete(&self, email: &str) -> Result<bool, StoreError> {
        let removed = {
            let mut entries = self.write("delete")?;

            match entries.shift_remove(email) {
                Some(entry) => entry.record,
                None => {
                    warn!(email, "user not deleted: no such user");
                    return Err(StoreError::not_found(email));
                }
            }
        };

        debug!(email, "user deleted");
        self.sink.emit(DomainEvent::Deleted(removed));
        Ok(true)
    }

    pub fn get(&self, email: &str) -> Result<UserRecord, StoreError> {
        let entries = self.read("get")?;
        entries
            .get(email)
            .map(|entry| entry.record.clone())
            .ok_or_else(|| StoreError::not_found(email))
    }

    /// All users, or only those matching `filter`, in insertion order.
    pub fn list(&self, filter: Option<&Filter>) -> Result<Vec<UserRecord>, StoreError> {
        let entries = self.read("list")?;
        let users = entries
            .values()
            .filter(|entry| filter.map_or(true, |filter| entry.projection.matches(filter)))
            .map(|entry| entry.record.clone())
            .collect();
        Ok(users)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Entries>, StoreError> {
        self.entries
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Entries>, StoreError> {
        self.entries
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}
