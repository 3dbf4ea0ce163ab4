use dioxus::prelude::*;
use store::{Column, ColumnVisibility};

use crate::icons::{FaChevronDown, FaGear};
use crate::Icon;

/// Dropdown of column checkboxes. Each change is reported through `on_toggle`
/// straight away; clicking outside the open panel only closes it.
#[component]
pub fn ColumnManager(columns: ColumnVisibility, on_toggle: EventHandler<Column>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "column-manager",
            button {
                class: "button outline",
                onclick: move |_| open.set(!open()),
                Icon { icon: FaGear, width: 14, height: 14 }
                span { "Manage Columns" }
                span {
                    class: if open() { "chevron open" } else { "chevron" },
                    Icon { icon: FaChevronDown, width: 12, height: 12 }
                }
            }

            if open() {
                div {
                    class: "column-manager-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "column-manager-panel",
                    for column in Column::ALL {
                        label {
                            key: "{column.key()}",
                            class: "column-option",
                            input {
                                r#type: "checkbox",
                                checked: columns.is_visible(column),
                                onchange: move |_| on_toggle.call(column),
                            }
                            span { "{column.label()}" }
                        }
                    }
                }
            }
        }
    }
}
