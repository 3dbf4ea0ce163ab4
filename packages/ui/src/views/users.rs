use std::time::Duration;

use dioxus::prelude::*;
use store::{AppConfig, Column, User, UserDirectory, UserDraft, UserField, UserId};

use crate::controller::UserManager;
use crate::icons::FaPlus;
use crate::platform::{make_store, sleep, PlatformStore};
use crate::{ColumnManager, ConfirmDialog, Icon, NotificationBanner, UserForm, UserList};

const USERS_CSS: Asset = asset!("/assets/styling/users.css");

pub type AppState = UserManager<PlatformStore>;

/// Schedule removal of the current notice after `timeout`, if one is set.
fn auto_dismiss(mut state: Signal<AppState>, timeout: Option<Duration>) {
    let Some(timeout) = timeout else {
        return;
    };
    let Some(id) = state.read().notice().map(|n| n.id) else {
        return;
    };
    spawn(async move {
        sleep(timeout).await;
        state.write().dismiss_notice_if(id);
    });
}

/// The user management page: hydrates from the platform store on mount and
/// wires every component to the shared [`UserManager`].
#[component]
pub fn UsersView() -> Element {
    let config = use_hook(|| AppConfig::load(&make_store()));
    let delay = config.simulated_delay();
    let timeout = config.notification_timeout();
    let id_strategy = config.users.id_strategy;

    let mut state = use_signal(move || {
        UserManager::new(UserDirectory::load_with(make_store(), id_strategy))
    });

    let handle_save = move |draft: UserDraft| {
        let pending = state.write().begin_save(draft);
        let Some(pending) = pending else {
            auto_dismiss(state, timeout);
            return;
        };
        spawn(async move {
            sleep(delay).await;
            state.write().finish_save(pending);
            auto_dismiss(state, timeout);
        });
    };

    let handle_confirm_delete = move |_: ()| {
        let pending = state.write().confirm_delete();
        if let Some(pending) = pending {
            spawn(async move {
                sleep(delay).await;
                state.write().finish_delete(pending);
                auto_dismiss(state, timeout);
            });
        }
    };

    let handle_update_field = move |(id, field, value): (UserId, UserField, String)| {
        state.write().update_field(id, field, &value);
        auto_dismiss(state, timeout);
    };

    let users = state.read().users().to_vec();
    let columns = state.read().columns();
    let editing = state.read().editing().cloned();
    let form_open = state.read().form_open();
    let busy = state.read().busy();
    let notice = state.read().notice().cloned();
    let pending_delete = state.read().pending_delete().cloned();
    let form_key = editing
        .as_ref()
        .map_or_else(|| "new".to_string(), |u| u.id.to_string());
    let total = users.len();

    rsx! {
        document::Link { rel: "stylesheet", href: USERS_CSS }

        div {
            class: "users-page",

            div {
                class: "users-header",
                h1 { "User Management System" }
                p { "Manage users with full CRUD operations" }
            }

            if let Some(notice) = notice {
                NotificationBanner {
                    notice: notice,
                    on_close: move |_| state.write().dismiss_notice(),
                }
            }

            div {
                class: "users-content",

                if form_open {
                    UserForm {
                        key: "{form_key}",
                        user: editing,
                        busy: busy,
                        on_save: handle_save,
                        on_cancel: move |_| state.write().cancel(),
                    }
                }

                div {
                    class: "users-toolbar",
                    div {
                        class: "users-toolbar-actions",
                        if !form_open {
                            button {
                                class: "button primary",
                                onclick: move |_| state.write().open_create_form(),
                                Icon { icon: FaPlus, width: 14, height: 14 }
                                span { "Add User" }
                            }
                        }
                        ColumnManager {
                            columns: columns,
                            on_toggle: move |column: Column| state.write().toggle_column(column),
                        }
                    }
                    div { class: "users-count", "Total Users: {total}" }
                }

                UserList {
                    users: users,
                    columns: columns,
                    busy: busy,
                    on_edit: move |user: User| state.write().edit(user),
                    on_delete: move |id: UserId| state.write().request_delete(id),
                    on_update_field: handle_update_field,
                }
            }

            if let Some(user) = pending_delete {
                ConfirmDialog {
                    title: "Delete User".to_string(),
                    message: format!("Are you sure you want to delete {}?", user.name),
                    confirm_label: "Delete".to_string(),
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| state.write().decline_delete(),
                }
            }
        }
    }
}
