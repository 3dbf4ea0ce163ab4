//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod controller;
pub use controller::{PendingDelete, PendingSave, UserManager};

pub mod platform;
pub use platform::{make_store, PlatformStore};

pub mod views;

mod notification;
pub use notification::{Notice, NoticeKind, NotificationBanner};

mod user_form;
pub use user_form::UserForm;

mod editable_cell;
pub use editable_cell::EditableCell;

mod user_list;
pub use user_list::UserList;

mod column_manager;
pub use column_manager::ColumnManager;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;
