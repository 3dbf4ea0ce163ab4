//! # Application controller
//!
//! [`UserManager`] owns the [`UserDirectory`] plus the transient UI state that
//! is never persisted: the record open in the full form, whether the form is
//! shown, the record awaiting delete confirmation, the notification slot and
//! the busy flag.
//!
//! Saves and deletes are split into a `begin_*` step, run synchronously from
//! the event handler, and a `finish_*` step that the view runs after the
//! simulated delay. Nothing serialises overlapping operations; the busy flag
//! only disables controls. Inline field updates commit immediately.

use store::{Column, ColumnVisibility, DirectoryError, KeyValueStore, User, UserDirectory};
use store::{UserDraft, UserField, UserId};

use crate::notification::{Notice, NoticeKind};

/// A save accepted by [`UserManager::begin_save`], waiting to be committed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSave {
    target: Option<UserId>,
    draft: UserDraft,
}

/// A confirmed delete waiting to be committed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingDelete {
    id: UserId,
}

pub struct UserManager<S: KeyValueStore> {
    directory: UserDirectory<S>,
    editing: Option<User>,
    form_open: bool,
    pending_delete: Option<UserId>,
    notice: Option<Notice>,
    last_notice_id: u64,
    busy: bool,
}

impl<S: KeyValueStore> UserManager<S> {
    pub fn new(directory: UserDirectory<S>) -> Self {
        Self {
            directory,
            editing: None,
            form_open: false,
            pending_delete: None,
            notice: None,
            last_notice_id: 0,
            busy: false,
        }
    }

    pub fn users(&self) -> &[User] {
        self.directory.users()
    }

    pub fn columns(&self) -> ColumnVisibility {
        self.directory.columns()
    }

    pub fn editing(&self) -> Option<&User> {
        self.editing.as_ref()
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The record awaiting delete confirmation, if it still exists.
    pub fn pending_delete(&self) -> Option<&User> {
        self.directory.get(self.pending_delete?)
    }

    pub fn open_create_form(&mut self) {
        self.editing = None;
        self.form_open = true;
    }

    pub fn edit(&mut self, user: User) {
        self.editing = Some(user);
        self.form_open = true;
    }

    pub fn cancel(&mut self) {
        self.form_open = false;
        self.editing = None;
    }

    /// Check the draft's email against every record other than the one being
    /// edited. On a collision, report it and return `None`.
    pub fn begin_save(&mut self, draft: UserDraft) -> Option<PendingSave> {
        let target = self.editing.as_ref().map(|u| u.id);
        if self.directory.email_taken(&draft.email, target) {
            self.notify(NoticeKind::Error, DirectoryError::DuplicateEmail.to_string());
            return None;
        }
        self.busy = true;
        Some(PendingSave { target, draft })
    }

    pub fn finish_save(&mut self, pending: PendingSave) {
        self.busy = false;
        let result = match pending.target {
            Some(id) => self
                .directory
                .replace(id, pending.draft)
                .map(|_| "User updated successfully!"),
            None => self
                .directory
                .create(pending.draft)
                .map(|_| "User created successfully!"),
        };
        match result {
            Ok(message) => {
                self.notify(NoticeKind::Success, message.to_string());
                self.form_open = false;
                self.editing = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "save rejected at commit");
                self.notify(NoticeKind::Error, e.to_string());
            }
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: UserId) {
        self.pending_delete = Some(id);
    }

    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the pending request. A request whose record has since gone is
    /// dropped.
    pub fn confirm_delete(&mut self) -> Option<PendingDelete> {
        let id = self.pending_delete.take()?;
        self.directory.get(id)?;
        self.busy = true;
        Some(PendingDelete { id })
    }

    pub fn finish_delete(&mut self, pending: PendingDelete) {
        self.busy = false;
        if self.pending_delete == Some(pending.id) {
            self.pending_delete = None;
        }
        match self.directory.remove(pending.id) {
            Ok(_) => self.notify(NoticeKind::Success, "User deleted successfully!".to_string()),
            Err(e) => self.notify(NoticeKind::Error, e.to_string()),
        }
    }

    /// Inline single-field edit, committed without the simulated delay.
    pub fn update_field(&mut self, id: UserId, field: UserField, value: &str) {
        match self.directory.update_field(id, field, value) {
            Ok(_) => self.notify(
                NoticeKind::Success,
                format!("{} updated successfully!", field.key()),
            ),
            Err(e) => self.notify(NoticeKind::Error, e.to_string()),
        }
    }

    pub fn toggle_column(&mut self, column: Column) {
        self.directory.toggle_column(column);
    }

    /// Put a message in the notification slot, replacing any previous one.
    pub fn notify(&mut self, kind: NoticeKind, message: String) {
        self.last_notice_id += 1;
        self.notice = Some(Notice {
            id: self.last_notice_id,
            kind,
            message,
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Clear the slot only if it still holds notice `id`.
    pub fn dismiss_notice_if(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn manager() -> UserManager<MemoryStore> {
        UserManager::new(UserDirectory::load(MemoryStore::new()))
    }

    fn save(manager: &mut UserManager<MemoryStore>, name: &str, email: &str) {
        let pending = manager.begin_save(UserDraft::new(name, email)).unwrap();
        manager.finish_save(pending);
    }

    fn notice(manager: &UserManager<MemoryStore>) -> (NoticeKind, String) {
        let n = manager.notice().unwrap();
        (n.kind, n.message.clone())
    }

    #[test]
    fn test_create_flow() {
        let mut manager = manager();
        manager.open_create_form();
        assert!(manager.form_open());

        let pending = manager.begin_save(UserDraft::new("Ann", "ann@x.com")).unwrap();
        assert!(manager.busy());
        assert!(manager.users().is_empty());

        manager.finish_save(pending);
        assert!(!manager.busy());
        assert!(!manager.form_open());
        assert!(manager.editing().is_none());
        assert_eq!(manager.users().len(), 1);
        assert_eq!(manager.users()[0].id, UserId::new(1));
        assert_eq!(
            notice(&manager),
            (NoticeKind::Success, "User created successfully!".to_string())
        );
    }

    #[test]
    fn test_duplicate_email_rejected_before_delay() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        manager.open_create_form();

        assert!(manager.begin_save(UserDraft::new("Bob", "ANN@X.COM")).is_none());
        assert!(!manager.busy());
        assert!(manager.form_open());
        assert_eq!(manager.users().len(), 1);
        assert_eq!(
            notice(&manager),
            (NoticeKind::Error, "Email already exists!".to_string())
        );
    }

    #[test]
    fn test_edit_flow_preserves_id() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        save(&mut manager, "Bob", "bob@x.com");

        let ann = manager.users()[0].clone();
        manager.edit(ann.clone());
        assert_eq!(manager.editing(), Some(&ann));

        // Keeping one's own email is not a collision
        save(&mut manager, "Anna", "ANN@x.com");
        assert_eq!(manager.users().len(), 2);
        assert_eq!(manager.users()[0].id, ann.id);
        assert_eq!(manager.users()[0].name, "Anna");
        assert!(manager.editing().is_none());
        assert_eq!(
            notice(&manager),
            (NoticeKind::Success, "User updated successfully!".to_string())
        );
    }

    #[test]
    fn test_cancel_clears_editing() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        manager.edit(manager.users()[0].clone());
        manager.cancel();
        assert!(!manager.form_open());
        assert!(manager.editing().is_none());
        assert_eq!(manager.users().len(), 1);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        let id = manager.users()[0].id;

        manager.request_delete(id);
        assert_eq!(manager.pending_delete().map(|u| u.id), Some(id));
        manager.decline_delete();
        assert!(manager.pending_delete().is_none());
        assert!(manager.confirm_delete().is_none());
        assert_eq!(manager.users().len(), 1);

        manager.request_delete(id);
        let pending = manager.confirm_delete().unwrap();
        assert!(manager.busy());
        assert_eq!(manager.users().len(), 1);

        manager.finish_delete(pending);
        assert!(!manager.busy());
        assert!(manager.users().is_empty());
        assert_eq!(
            notice(&manager),
            (NoticeKind::Success, "User deleted successfully!".to_string())
        );
    }

    #[test]
    fn test_stale_delete_request_is_dropped() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        let id = manager.users()[0].id;

        manager.request_delete(id);
        let pending = manager.confirm_delete().unwrap();
        // Asked again while the first delete was waiting
        manager.request_delete(id);
        manager.finish_delete(pending);

        assert!(manager.pending_delete().is_none());
        assert!(manager.confirm_delete().is_none());
        assert!(!manager.busy());
    }

    #[test]
    fn test_confirm_after_record_vanished() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        save(&mut manager, "Bob", "bob@x.com");
        let ann = manager.users()[0].id;
        let bob = manager.users()[1].id;

        manager.request_delete(ann);
        let pending = manager.confirm_delete().unwrap();
        manager.finish_delete(pending);

        manager.request_delete(ann);
        assert!(manager.confirm_delete().is_none());
        assert!(!manager.busy());
        assert_eq!(manager.users().len(), 1);
        assert_eq!(manager.users()[0].id, bob);
    }

    #[test]
    fn test_update_field_inline() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        save(&mut manager, "Bob", "bob@x.com");
        let bob = manager.users()[1].id;

        manager.update_field(bob, UserField::Name, "Bobby");
        assert!(!manager.busy());
        assert_eq!(manager.users()[1].name, "Bobby");
        assert_eq!(
            notice(&manager),
            (NoticeKind::Success, "name updated successfully!".to_string())
        );

        manager.update_field(bob, UserField::Email, "Ann@x.com");
        assert_eq!(manager.users()[1].email, "bob@x.com");
        assert_eq!(
            notice(&manager),
            (NoticeKind::Error, "Email already exists!".to_string())
        );
    }

    #[test]
    fn test_edit_of_deleted_user_reports_not_found() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        let ann = manager.users()[0].clone();

        manager.edit(ann.clone());
        let pending = manager.begin_save(UserDraft::new("Anna", "ann@x.com")).unwrap();

        // Deleted while the save was waiting
        manager.request_delete(ann.id);
        let delete = manager.confirm_delete().unwrap();
        manager.finish_delete(delete);

        manager.finish_save(pending);
        assert!(manager.users().is_empty());
        assert_eq!(notice(&manager).0, NoticeKind::Error);
        assert!(manager.form_open());
    }

    #[test]
    fn test_notice_slot_replacement_and_dismissal() {
        let mut manager = manager();
        manager.notify(NoticeKind::Success, "first".to_string());
        let first = manager.notice().unwrap().id;
        manager.notify(NoticeKind::Error, "second".to_string());
        let second = manager.notice().unwrap().id;
        assert_ne!(first, second);

        // A stale timer leaves the newer notice alone
        manager.dismiss_notice_if(first);
        assert_eq!(notice(&manager).1, "second");

        manager.dismiss_notice_if(second);
        assert!(manager.notice().is_none());

        manager.notify(NoticeKind::Success, "third".to_string());
        manager.dismiss_notice();
        assert!(manager.notice().is_none());
    }

    #[test]
    fn test_toggle_column_twice() {
        let mut manager = manager();
        let before = manager.columns();
        manager.toggle_column(Column::Email);
        assert!(!manager.columns().email);
        manager.toggle_column(Column::Email);
        assert_eq!(manager.columns(), before);
    }

    #[test]
    fn test_create_rename_delete_scenario() {
        let mut manager = manager();
        save(&mut manager, "Ann", "ann@x.com");
        assert!(manager.begin_save(UserDraft::new("Bob", "ANN@X.COM")).is_none());

        let ann = manager.users()[0].id;
        manager.update_field(ann, UserField::Name, "Annie");
        assert_eq!(
            manager.users(),
            &[User {
                id: UserId::new(1),
                name: "Annie".to_string(),
                email: "ann@x.com".to_string(),
            }]
        );

        manager.request_delete(ann);
        let pending = manager.confirm_delete().unwrap();
        manager.finish_delete(pending);
        assert!(manager.users().is_empty());
    }
}
