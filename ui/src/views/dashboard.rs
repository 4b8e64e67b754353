use dioxus::prelude::*;

use crate::core::acquire::AcquisitionError;
use crate::core::summary::PerformanceSummary;
use crate::dashboard::{
    AccuracyCharts, CoachInsightCard, DashboardHeader, DashboardState, DeepDiveTable,
    OverallStatsCard, QuickActions, TopicBreakdownList,
};

/// The whole mini-app view. Resolves the payload once after mount and then
/// stays in `Rendered` or `Error` until the page reloads.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_signal(|| DashboardState::Loading);

    use_effect(move || {
        if matches!(&*state.peek(), DashboardState::Loading) {
            state.set(DashboardState::load());
        }
    });

    rsx! {
        main { class: "page page-dashboard",
            match state() {
                DashboardState::Loading => rsx! {
                    section { class: "dash-card dash-loading",
                        p { class: "dash-card__placeholder", "Crunching your numbers…" }
                    }
                },
                DashboardState::Error(err) => rsx! {
                    ErrorCard { error: err }
                },
                DashboardState::Rendered(summary) => render_summary(summary),
            }
        }
    }
}

fn render_summary(summary: PerformanceSummary) -> Element {
    rsx! {
        DashboardHeader { user_name: summary.user_name }
        OverallStatsCard { overall: summary.overall }
        CoachInsightCard { insight: summary.coach_insight }
        AccuracyCharts {
            radar: summary.radar,
            doughnut: summary.doughnut,
            subjects: summary.deep_dive.clone(),
        }
        TopicBreakdownList { topics: summary.topics }
        DeepDiveTable { subjects: summary.deep_dive }
        QuickActions {}
    }
}

#[component]
fn ErrorCard(error: AcquisitionError) -> Element {
    let hint = error_hint(&error);

    rsx! {
        section { class: "dash-card dash-error",
            div { class: "dash-card__header",
                h2 { "Couldn't load your dashboard" }
            }
            p { class: "dash-error__message", "{error}" }
            p { class: "dash-card__placeholder", "{hint}" }
        }
    }
}

fn error_hint(error: &AcquisitionError) -> &'static str {
    match error {
        AcquisitionError::MissingParameter => {
            "Open this page from the bot's stats button so it can pass your data along."
        }
        AcquisitionError::DecodeFailure | AcquisitionError::MalformedJson(_) => {
            "The link looks damaged. Ask the bot for a fresh stats link and try again."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_has_a_hint() {
        assert!(!error_hint(&AcquisitionError::MissingParameter).is_empty());
        assert!(!error_hint(&AcquisitionError::DecodeFailure).is_empty());
        assert!(!error_hint(&AcquisitionError::MalformedJson("x".into())).is_empty());
    }
}
