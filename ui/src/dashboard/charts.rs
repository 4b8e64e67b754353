use dioxus::prelude::*;

use crate::core::charts::{self, ChartKind, ChartSpec};
use crate::core::summary::{ChartSeries, SubjectEntry};

pub const RADAR_CANVAS_ID: &str = "radar-chart";
pub const DOUGHNUT_CANVAS_ID: &str = "doughnut-chart";
pub const ACCURACY_CANVAS_ID: &str = "accuracy-chart";

#[component]
pub fn AccuracyCharts(
    radar: ChartSeries,
    doughnut: ChartSeries,
    subjects: Vec<SubjectEntry>,
) -> Element {
    let plan = chart_plan(&radar, &doughnut, &subjects);
    let effect_plan = plan.clone();

    // Canvases exist only after this render pass, so binding happens in an
    // effect. Re-renders go through the registry: previous instances on the
    // same canvas are destroyed before the repaint.
    use_effect(move || {
        for panel in &effect_plan {
            charts::bind(panel.canvas_id, panel.spec.clone());
        }
    });

    rsx! {
        section { class: "dash-card dash-charts",
            div { class: "dash-card__header",
                h2 { "Charts" }
            }

            if plan.is_empty() {
                p { class: "dash-card__placeholder",
                    "Charts light up once there is something to plot."
                }
            } else {
                div { class: "dash-charts__panels",
                    for panel in plan.iter() {
                        figure { class: "dash-charts__panel",
                            canvas {
                                id: "{panel.canvas_id}",
                                width: "320",
                                height: "240",
                            }
                            figcaption { "{panel.title}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ChartPanel {
    pub canvas_id: &'static str,
    pub title: &'static str,
    pub spec: ChartSpec,
}

/// Decide which canvases this payload warrants. When the bot sent no chart
/// block at all, fall back to a bar chart of subject accuracy, which is what
/// the earliest webapp revision drew.
pub(crate) fn chart_plan(
    radar: &ChartSeries,
    doughnut: &ChartSeries,
    subjects: &[SubjectEntry],
) -> Vec<ChartPanel> {
    let mut plan = Vec::new();

    if !radar.is_empty() {
        plan.push(ChartPanel {
            canvas_id: RADAR_CANVAS_ID,
            title: "Strength radar",
            spec: ChartSpec::from_series(ChartKind::Radar, radar),
        });
    }
    if !doughnut.is_empty() {
        plan.push(ChartPanel {
            canvas_id: DOUGHNUT_CANVAS_ID,
            title: "Attempt mix",
            spec: ChartSpec::from_series(ChartKind::Doughnut, doughnut),
        });
    }

    if plan.is_empty() && !subjects.is_empty() {
        plan.push(ChartPanel {
            canvas_id: ACCURACY_CANVAS_ID,
            title: "Subject-wise accuracy",
            spec: ChartSpec {
                kind: ChartKind::Bar,
                labels: subjects.iter().map(|s| s.name.clone()).collect(),
                data: subjects.iter().map(|s| s.accuracy).collect(),
            },
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], data: &[f64]) -> ChartSeries {
        ChartSeries {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            data: data.to_vec(),
        }
    }

    fn subject(name: &str, accuracy: f64) -> SubjectEntry {
        SubjectEntry {
            name: name.into(),
            accuracy,
            avg_speed: 0.0,
            score: 0.0,
        }
    }

    #[test]
    fn payload_charts_take_priority() {
        let plan = chart_plan(
            &series(&["Physics"], &[88.0]),
            &series(&["MCQ"], &[10.0]),
            &[subject("Physics", 88.0)],
        );
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].canvas_id, RADAR_CANVAS_ID);
        assert_eq!(plan[1].canvas_id, DOUGHNUT_CANVAS_ID);
    }

    #[test]
    fn missing_chart_block_falls_back_to_subject_bars() {
        let plan = chart_plan(
            &ChartSeries::default(),
            &ChartSeries::default(),
            &[subject("Physics", 88.0), subject("Chemistry", 74.5)],
        );
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].canvas_id, ACCURACY_CANVAS_ID);
        assert_eq!(plan[0].spec.kind, ChartKind::Bar);
        assert_eq!(plan[0].spec.data, vec![88.0, 74.5]);
    }

    #[test]
    fn nothing_to_plot_yields_an_empty_plan() {
        let plan = chart_plan(&ChartSeries::default(), &ChartSeries::default(), &[]);
        assert!(plan.is_empty());
    }
}
