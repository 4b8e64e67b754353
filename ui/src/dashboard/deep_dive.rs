use dioxus::prelude::*;

use crate::core::{format, summary::SubjectEntry};

#[component]
pub fn DeepDiveTable(subjects: Vec<SubjectEntry>) -> Element {
    let rows: Vec<(String, String, String, String)> = subjects.iter().map(subject_row).collect();

    rsx! {
        section { class: "dash-card dash-deep-dive",
            div { class: "dash-card__header",
                h2 { "Subject deep dive" }
            }

            if rows.is_empty() {
                p { class: "dash-card__placeholder",
                    "Subject-level analysis appears once enough answers are recorded."
                }
            } else {
                table { class: "dash-deep-dive__table",
                    thead {
                        tr {
                            th { "Subject" }
                            th { "Accuracy" }
                            th { "Avg speed" }
                            th { "Score" }
                        }
                    }
                    tbody {
                        for (name, accuracy, speed, score) in rows.iter() {
                            tr {
                                td { "{name}" }
                                td { "{accuracy}" }
                                td { "{speed}" }
                                td { "{score}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn subject_row(subject: &SubjectEntry) -> (String, String, String, String) {
    (
        subject.name.clone(),
        format::format_percent(subject.accuracy),
        format::format_speed(subject.avg_speed),
        format::format_score(subject.score),
    )
}
