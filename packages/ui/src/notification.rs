//! Single-slot transient notification.

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// The message currently shown to the user.
///
/// `id` increases with every notice so a delayed dismissal can tell whether
/// the slot still holds the notice it was scheduled for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[component]
pub fn NotificationBanner(notice: Notice, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: match notice.kind {
                NoticeKind::Success => "notification success",
                NoticeKind::Error => "notification error",
            },
            span { class: "notification-message", "{notice.message}" }
            button {
                class: "notification-close",
                title: "Dismiss",
                onclick: move |_| on_close.call(()),
                Icon { icon: FaXmark, width: 14, height: 14 }
            }
        }
    }
}
