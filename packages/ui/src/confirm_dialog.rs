use dioxus::prelude::*;

/// Modal yes/no prompt. Clicking the backdrop counts as Cancel.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "{title}" }
                    p { class: "modal-text", "{message}" }
                    div {
                        class: "modal-actions",
                        button {
                            class: "button destructive",
                            onclick: move |_| on_confirm.call(()),
                            "{confirm_label}"
                        }
                        button {
                            class: "button outline",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
