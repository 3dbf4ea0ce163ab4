//! # User directory: the canonical user collection
//!
//! [`UserDirectory`] holds the user list and the column visibility map,
//! hydrated from a [`KeyValueStore`] and written back after every mutation.
//! It is the single place that enforces the email-uniqueness invariant.
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](UserDirectory::load) / [`load_with`](UserDirectory::load_with) | Hydrate from the `users` and `visibleColumns` keys. Missing or malformed payloads fall back to an empty list and all columns visible. |
//! | [`users`](UserDirectory::users) / [`get`](UserDirectory::get) | Current records in insertion order. |
//! | [`email_taken`](UserDirectory::email_taken) | Case-insensitive collision test, optionally ignoring one record. |
//!
//! ## Write path
//!
//! Each write validates its input, checks uniqueness, mutates the in-memory
//! list and persists it. A rejected write leaves the collection unchanged.
//! Persistence is best-effort: a failed store write is logged and the
//! in-memory state is kept.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`create`](UserDirectory::create) | Appends a record with a freshly allocated id. |
//! | [`replace`](UserDirectory::replace) | Replaces name and email of a record in place, keeping its id. |
//! | [`update_field`](UserDirectory::update_field) | Replaces a single field of a record. |
//! | [`remove`](UserDirectory::remove) | Deletes a record by id. |
//! | [`toggle_column`](UserDirectory::toggle_column) | Flips one column flag and persists the map. |

use crate::config::IdStrategy;
use crate::error::DirectoryError;
use crate::models::{Column, ColumnVisibility, User, UserDraft, UserField, UserId};
use crate::storage::{read_json, write_json, KeyValueStore, USERS_KEY, VISIBLE_COLUMNS_KEY};
use crate::validation::{validate_draft, validate_field};

/// The user collection backed by a KeyValueStore.
#[derive(Debug)]
pub struct UserDirectory<S: KeyValueStore> {
    store: S,
    users: Vec<User>,
    columns: ColumnVisibility,
    id_strategy: IdStrategy,
    session_counter: u64,
}

impl<S: KeyValueStore> UserDirectory<S> {
    /// Hydrate with the default id strategy.
    pub fn load(store: S) -> Self {
        Self::load_with(store, IdStrategy::default())
    }

    pub fn load_with(store: S, id_strategy: IdStrategy) -> Self {
        let users: Vec<User> = read_json(&store, USERS_KEY).unwrap_or_default();
        let columns: ColumnVisibility = read_json(&store, VISIBLE_COLUMNS_KEY).unwrap_or_default();
        tracing::debug!(users = users.len(), ?columns, "hydrated user directory");
        Self {
            store,
            users,
            columns,
            id_strategy,
            session_counter: 0,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn columns(&self) -> ColumnVisibility {
        self.columns
    }

    /// Whether any record other than `except` uses `email`, ignoring case.
    pub fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        let wanted = email.trim().to_lowercase();
        self.users
            .iter()
            .any(|u| Some(u.id) != except && u.email.to_lowercase() == wanted)
    }

    pub fn ensure_email_available(
        &self,
        email: &str,
        except: Option<UserId>,
    ) -> Result<(), DirectoryError> {
        if self.email_taken(email, except) {
            return Err(DirectoryError::DuplicateEmail);
        }
        Ok(())
    }

    /// Append a new record built from `draft`.
    pub fn create(&mut self, draft: UserDraft) -> Result<User, DirectoryError> {
        validate_draft(&draft)?;
        let draft = draft.trimmed();
        self.ensure_email_available(&draft.email, None)?;

        let user = User {
            id: self.next_id()?,
            name: draft.name,
            email: draft.email,
        };
        self.users.push(user.clone());
        self.persist_users();
        tracing::info!(id = %user.id, "created user");
        Ok(user)
    }

    /// Replace name and email of record `id`, keeping its position and id.
    pub fn replace(&mut self, id: UserId, draft: UserDraft) -> Result<User, DirectoryError> {
        validate_draft(&draft)?;
        let draft = draft.trimmed();
        self.ensure_email_available(&draft.email, Some(id))?;

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DirectoryError::NotFound(id))?;
        user.name = draft.name;
        user.email = draft.email;
        let updated = user.clone();
        self.persist_users();
        tracing::info!(id = %id, "updated user");
        Ok(updated)
    }

    /// Replace a single field of record `id`.
    pub fn update_field(
        &mut self,
        id: UserId,
        field: UserField,
        value: &str,
    ) -> Result<User, DirectoryError> {
        validate_field(field, value)?;
        let value = value.trim();
        if field == UserField::Email {
            self.ensure_email_available(value, Some(id))?;
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DirectoryError::NotFound(id))?;
        match field {
            UserField::Name => user.name = value.to_string(),
            UserField::Email => user.email = value.to_string(),
        }
        let updated = user.clone();
        self.persist_users();
        tracing::info!(id = %id, field = field.key(), "updated user field");
        Ok(updated)
    }

    /// Delete record `id`.
    pub fn remove(&mut self, id: UserId) -> Result<User, DirectoryError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DirectoryError::NotFound(id))?;
        let removed = self.users.remove(index);
        self.persist_users();
        tracing::info!(id = %id, remaining = self.users.len(), "deleted user");
        Ok(removed)
    }

    /// Flip the visibility of `column` and persist the map.
    pub fn toggle_column(&mut self, column: Column) -> ColumnVisibility {
        self.columns = self.columns.toggled(column);
        if let Err(e) = write_json(&self.store, VISIBLE_COLUMNS_KEY, &self.columns) {
            tracing::warn!(error = %e, "failed to persist column visibility");
        }
        self.columns
    }

    fn next_id(&mut self) -> Result<UserId, DirectoryError> {
        let next = match self.id_strategy {
            IdStrategy::NextAfterMax => {
                let max = self.users.iter().map(|u| u.id.get()).max().unwrap_or(0);
                max.checked_add(1)
            }
            IdStrategy::SessionCounter => {
                let next = self.session_counter.checked_add(1);
                if let Some(next) = next {
                    self.session_counter = next;
                }
                next
            }
        };
        next.map(UserId::new).ok_or_else(|| {
            tracing::warn!(strategy = ?self.id_strategy, "user id space exhausted");
            DirectoryError::IdsExhausted
        })
    }

    fn persist_users(&self) {
        match write_json(&self.store, USERS_KEY, &self.users) {
            Ok(()) => tracing::debug!(users = self.users.len(), "persisted users"),
            Err(e) => tracing::warn!(error = %e, "failed to persist users"),
        }
    }
}
