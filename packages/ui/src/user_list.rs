use dioxus::prelude::*;
use store::{ColumnVisibility, User, UserField, UserId};

use crate::editable_cell::EditableCell;
use crate::icons::{FaPencil, FaTrashCan};
use crate::Icon;

/// Table of users showing the visible columns plus a row of actions.
#[component]
pub fn UserList(
    users: Vec<User>,
    columns: ColumnVisibility,
    busy: bool,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<UserId>,
    on_update_field: EventHandler<(UserId, UserField, String)>,
) -> Element {
    if users.is_empty() {
        return rsx! {
            div {
                class: "users-empty",
                p { "No users found. Add your first user!" }
            }
        };
    }

    let visible = columns.visible_columns();

    rsx! {
        div {
            class: "users-table-wrapper",
            table {
                class: "users-table",
                thead {
                    tr {
                        for column in visible.iter() {
                            th { key: "{column.key()}", "{column.label()}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in users.iter() {
                        tr {
                            key: "{user.id}",
                            for column in visible.iter() {
                                td {
                                    key: "{user.id}-{column.key()}",
                                    if let Some(field) = column.field() {
                                        EditableCell {
                                            user_id: user.id,
                                            field: field,
                                            value: user.field(field).to_string(),
                                            on_save: on_update_field,
                                        }
                                    } else {
                                        span { class: "user-id", "{user.id}" }
                                    }
                                }
                            }
                            td {
                                class: "user-actions",
                                button {
                                    class: "user-action edit",
                                    title: "Edit user",
                                    disabled: busy,
                                    onclick: {
                                        let user = user.clone();
                                        move |_| on_edit.call(user.clone())
                                    },
                                    Icon { icon: FaPencil, width: 14, height: 14 }
                                }
                                button {
                                    class: "user-action delete",
                                    title: "Delete user",
                                    disabled: busy,
                                    onclick: {
                                        let id = user.id;
                                        move |_| on_delete.call(id)
                                    },
                                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
