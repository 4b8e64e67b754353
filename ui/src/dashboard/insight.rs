use dioxus::prelude::*;

#[component]
pub fn CoachInsightCard(insight: String) -> Element {
    rsx! {
        section { class: "dash-card dash-insight",
            div { class: "dash-card__header",
                h2 { "Coach's corner" }
            }
            if insight.is_empty() {
                p { class: "dash-card__placeholder",
                    "Your coach hasn't left a note yet. Finish a quiz to get personalised pointers."
                }
            } else {
                p { class: "dash-insight__text", "{insight}" }
            }
        }
    }
}
