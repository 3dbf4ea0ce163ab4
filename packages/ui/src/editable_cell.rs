use dioxus::prelude::*;
use store::validation::validate_field;
use store::{UserField, UserId};

use crate::icons::{FaCheck, FaPencil, FaXmark};
use crate::Icon;

/// A table cell that switches to an input for in-place editing.
///
/// Enter or the check button saves, Escape or the cross cancels. A value that
/// fails validation keeps the cell open with the message below it.
#[component]
pub fn EditableCell(
    user_id: UserId,
    field: UserField,
    value: String,
    on_save: EventHandler<(UserId, UserField, String)>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let mut save = move || {
        let current = draft();
        if let Err(e) = validate_field(field, &current) {
            error.set(Some(e.to_string()));
            return;
        }
        on_save.call((user_id, field, current));
        editing.set(false);
        error.set(None);
    };

    let mut cancel = move || {
        editing.set(false);
        error.set(None);
    };

    if !editing() {
        let initial = value.clone();
        return rsx! {
            div {
                class: "editable-cell",
                span { class: "editable-cell-value", "{value}" }
                button {
                    class: "editable-cell-edit",
                    title: "Edit {field.key()}",
                    onclick: move |_| {
                        draft.set(initial.clone());
                        editing.set(true);
                    },
                    Icon { icon: FaPencil, width: 12, height: 12 }
                }
            }
        };
    }

    rsx! {
        div {
            class: "editable-cell editing",
            div {
                class: "editable-cell-row",
                input {
                    class: if error().is_some() { "form-input invalid" } else { "form-input" },
                    r#type: if field == UserField::Email { "email" } else { "text" },
                    value: draft(),
                    autofocus: true,
                    oninput: move |evt: FormEvent| {
                        draft.set(evt.value());
                        if error().is_some() {
                            error.set(None);
                        }
                    },
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Enter => save(),
                        Key::Escape => cancel(),
                        _ => {}
                    },
                }
                button {
                    class: "editable-cell-save",
                    title: "Save",
                    onclick: move |_| save(),
                    Icon { icon: FaCheck, width: 14, height: 14 }
                }
                button {
                    class: "editable-cell-cancel",
                    title: "Cancel",
                    onclick: move |_| cancel(),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            if let Some(message) = error() {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
