use dioxus::prelude::*;
use store::validation::DraftErrors;
use store::{User, UserDraft, UserField};

fn input_class(error: Option<&String>) -> &'static str {
    if error.is_some() {
        "form-input invalid"
    } else {
        "form-input"
    }
}

/// Inline form for creating a user, or editing `user` when present.
///
/// Validation runs on submit; `on_save` only fires for a draft that passes.
#[component]
pub fn UserForm(
    user: Option<User>,
    busy: bool,
    on_save: EventHandler<UserDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = user.is_some();
    let initial = user.as_ref().map(User::to_draft).unwrap_or_default();
    let mut name = use_signal({
        let initial = initial.name;
        move || initial
    });
    let mut email = use_signal({
        let initial = initial.email;
        move || initial
    });
    let mut errors = use_signal(DraftErrors::default);

    let handle_submit = move |_| {
        let draft = UserDraft::new(name(), email());
        let found = DraftErrors::check(&draft);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(DraftErrors::default());
        on_save.call(draft.trimmed());
    };

    let name_error = errors().name.map(|e| e.to_string());
    let email_error = errors().email.map(|e| e.to_string());
    let name_class = input_class(name_error.as_ref());
    let email_class = input_class(email_error.as_ref());

    rsx! {
        div {
            class: "user-form",
            h2 { class: "user-form-title",
                if editing { "Edit User" } else { "Add New User" }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Name" }
                input {
                    class: name_class,
                    r#type: "text",
                    placeholder: "Enter name",
                    value: name(),
                    disabled: busy,
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        errors.write().clear(UserField::Name);
                    },
                }
                if let Some(message) = &name_error {
                    p { class: "field-error", "{message}" }
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Email" }
                input {
                    class: email_class,
                    r#type: "email",
                    placeholder: "Enter email",
                    value: email(),
                    disabled: busy,
                    oninput: move |evt: FormEvent| {
                        email.set(evt.value());
                        errors.write().clear(UserField::Email);
                    },
                }
                if let Some(message) = &email_error {
                    p { class: "field-error", "{message}" }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "button primary",
                    disabled: busy,
                    onclick: handle_submit,
                    if busy {
                        "Saving..."
                    } else if editing {
                        "Update User"
                    } else {
                        "Create User"
                    }
                }
                button {
                    class: "button outline",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_marks_invalid_fields() {
        let errors = DraftErrors::check(&UserDraft::new("", "ann@x.com"));
        let name_error = errors.name.map(|e| e.to_string());
        let email_error = errors.email.map(|e| e.to_string());

        assert_eq!(input_class(name_error.as_ref()), "form-input invalid");
        assert_eq!(input_class(email_error.as_ref()), "form-input");
        // The message is still available after choosing the class
        assert_eq!(name_error.as_deref(), Some("Name is required"));
    }
}
