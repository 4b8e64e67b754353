use dioxus::prelude::*;

use crate::core::host::{self, Command};

#[component]
pub fn QuickActions() -> Element {
    rsx! {
        section { class: "dash-card dash-actions",
            div { class: "dash-card__header",
                h2 { "Quick actions" }
            }
            div { class: "dash-actions__buttons",
                for command in Command::ALL.into_iter() {
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| host::send(command),
                        "{command.label()}"
                    }
                }
            }
        }
    }
}
