use dioxus::prelude::*;

use crate::core::{format, summary::TopicEntry};

#[component]
pub fn TopicBreakdownList(topics: Vec<TopicEntry>) -> Element {
    let cards: Vec<TopicCard> = topics.iter().map(topic_card).collect();

    rsx! {
        section { class: "dash-card dash-topics",
            div { class: "dash-card__header",
                h2 { "Performance by topic" }
                if !cards.is_empty() {
                    span { class: "dash-card__meta", "{cards.len()} topics tracked" }
                }
            }

            if cards.is_empty() {
                p { class: "dash-card__placeholder",
                    "Topic-wise numbers appear after your first graded quiz."
                }
            } else {
                ul { class: "dash-topics__items",
                    for card in cards.into_iter() {
                        {render_topic_card(card)}
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct TopicCard {
    title: String,
    headline: String,
    rows: Vec<BreakdownRow>,
}

#[derive(Clone, Debug, PartialEq)]
struct BreakdownRow {
    kind: String,
    ratio: String,
    accuracy: String,
    speed: String,
}

/// Pure view model: one card per topic, one row per breakdown entry.
fn topic_card(topic: &TopicEntry) -> TopicCard {
    TopicCard {
        title: topic.topic_name.clone(),
        headline: format!(
            "{} · {}/{} correct · {}",
            format::format_percent(topic.accuracy),
            topic.total_correct,
            topic.total_questions,
            format::format_speed(topic.avg_speed),
        ),
        rows: topic
            .breakdown
            .iter()
            .map(|entry| BreakdownRow {
                kind: entry.kind.clone(),
                ratio: format!("{}/{}", entry.correct, entry.total),
                accuracy: format::format_percent(entry.accuracy),
                speed: format::format_speed(entry.avg_speed),
            })
            .collect(),
    }
}

fn render_topic_card(card: TopicCard) -> Element {
    let TopicCard {
        title,
        headline,
        rows,
    } = card;

    rsx! {
        li { class: "dash-topics__item",
            div { class: "dash-topics__heading",
                h3 { class: "dash-topics__name", "{title}" }
                span { class: "dash-topics__headline", "{headline}" }
            }

            if !rows.is_empty() {
                table { class: "dash-topics__breakdown",
                    thead {
                        tr {
                            th { "Type" }
                            th { "Correct" }
                            th { "Accuracy" }
                            th { "Avg speed" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                td { "{row.kind}" }
                                td { "{row.ratio}" }
                                td { "{row.accuracy}" }
                                td { "{row.speed}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
