use dioxus::prelude::*;

use crate::core::{format, summary::OverallStats};

#[component]
pub fn OverallStatsCard(overall: OverallStats) -> Element {
    let cells = stat_cells(&overall);

    rsx! {
        section { class: "dash-card dash-stats",
            div { class: "dash-card__header",
                h2 { "Overall stats" }
            }
            div { class: "dash-stats__grid",
                for (label, value) in cells.into_iter() {
                    div { class: "dash-stats__cell",
                        span { class: "dash-stats__label", "{label}" }
                        strong { class: "dash-stats__value", "{value}" }
                    }
                }
            }
        }
    }
}

/// View model for the stat grid: label/value pairs in display order.
fn stat_cells(overall: &OverallStats) -> Vec<(&'static str, String)> {
    vec![
        ("Average accuracy", format::format_percent(overall.overall_accuracy)),
        ("Questions attempted", overall.total_questions.to_string()),
        ("Quizzes taken", overall.total_quizzes.to_string()),
        ("Current streak", overall.current_streak.to_string()),
        ("Best subject", overall.best_subject.clone()),
    ]
}
