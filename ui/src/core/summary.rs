//! Normalized performance summary consumed by the dashboard views.
//!
//! Normalization is total: every missing field collapses to a stated default
//! (0 for counts and measures, `"N/A"` for labels, empty vectors for
//! collections), so no view ever has to reason about absence.

use super::payload::{
    RawBreakdownEntry, RawChartSeries, RawCharts, RawDeepDive, RawOverallStats, RawPayload,
    RawSubjectEntry, RawTopicEntry,
};

/// Placeholder for any missing label.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceSummary {
    pub user_name: String,
    pub overall: OverallStats,
    pub coach_insight: String,
    pub topics: Vec<TopicEntry>,
    pub deep_dive: Vec<SubjectEntry>,
    pub radar: ChartSeries,
    pub doughnut: ChartSeries,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverallStats {
    pub overall_accuracy: f64,
    pub total_questions: u32,
    pub best_subject: String,
    pub total_quizzes: u32,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicEntry {
    pub topic_name: String,
    pub accuracy: f64,
    pub total_correct: u32,
    pub total_questions: u32,
    pub avg_speed: f64,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakdownEntry {
    pub kind: String,
    pub correct: u32,
    pub total: u32,
    pub accuracy: f64,
    pub avg_speed: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectEntry {
    pub name: String,
    pub accuracy: f64,
    pub avg_speed: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.data.is_empty()
    }
}

impl RawPayload {
    /// Fill every gap with its default. Total; never fails.
    pub fn normalize(self) -> PerformanceSummary {
        let overall = self.overall_stats.unwrap_or_default();
        PerformanceSummary {
            user_name: label(self.user_name),
            overall: OverallStats {
                overall_accuracy: measure(overall.overall_accuracy),
                total_questions: count(overall.total_questions),
                best_subject: label(overall.best_subject),
                total_quizzes: count(overall.total_quizzes),
                current_streak: count(overall.current_streak),
            },
            coach_insight: self.coach_insight.unwrap_or_default(),
            topics: self
                .performance_by_topic
                .unwrap_or_default()
                .into_iter()
                .map(normalize_topic)
                .collect(),
            deep_dive: self
                .deep_dive
                .and_then(|deep| deep.subjects)
                .unwrap_or_default()
                .into_iter()
                .map(normalize_subject)
                .collect(),
            radar: normalize_series(self.charts.as_ref().and_then(|c| c.radar.clone())),
            doughnut: normalize_series(self.charts.and_then(|c| c.doughnut)),
        }
    }
}

fn normalize_topic(raw: RawTopicEntry) -> TopicEntry {
    TopicEntry {
        topic_name: label(raw.topic_name),
        accuracy: measure(raw.accuracy),
        total_correct: count(raw.total_correct),
        total_questions: count(raw.total_questions),
        avg_speed: measure(raw.avg_speed),
        breakdown: raw
            .breakdown
            .unwrap_or_default()
            .into_iter()
            .map(|entry| BreakdownEntry {
                kind: label(entry.kind),
                correct: count(entry.correct),
                total: count(entry.total),
                accuracy: measure(entry.accuracy),
                avg_speed: measure(entry.avg_speed),
            })
            .collect(),
    }
}

fn normalize_subject(raw: RawSubjectEntry) -> SubjectEntry {
    SubjectEntry {
        name: label(raw.name),
        accuracy: measure(raw.accuracy),
        avg_speed: measure(raw.avg_speed),
        score: measure(raw.score),
    }
}

fn normalize_series(raw: Option<RawChartSeries>) -> ChartSeries {
    let raw = raw.unwrap_or_default();
    ChartSeries {
        labels: raw.labels.unwrap_or_default(),
        data: raw
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|value| if value.is_finite() { value } else { 0.0 })
            .collect(),
    }
}

fn label(value: Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => PLACEHOLDER.to_string(),
    }
}

fn measure(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

fn count(value: Option<f64>) -> u32 {
    measure(value).round().min(u32::MAX as f64) as u32
}

/// Raw projection of an already-normalized summary. Exists so the
/// idempotence of `normalize` stays checkable.
impl From<&PerformanceSummary> for RawPayload {
    fn from(summary: &PerformanceSummary) -> Self {
        RawPayload {
            user_name: Some(summary.user_name.clone()),
            overall_stats: Some(RawOverallStats {
                overall_accuracy: Some(summary.overall.overall_accuracy),
                total_questions: Some(f64::from(summary.overall.total_questions)),
                best_subject: Some(summary.overall.best_subject.clone()),
                total_quizzes: Some(f64::from(summary.overall.total_quizzes)),
                current_streak: Some(f64::from(summary.overall.current_streak)),
            }),
            coach_insight: Some(summary.coach_insight.clone()),
            performance_by_topic: Some(
                summary
                    .topics
                    .iter()
                    .map(|topic| RawTopicEntry {
                        topic_name: Some(topic.topic_name.clone()),
                        accuracy: Some(topic.accuracy),
                        total_correct: Some(f64::from(topic.total_correct)),
                        total_questions: Some(f64::from(topic.total_questions)),
                        avg_speed: Some(topic.avg_speed),
                        breakdown: Some(
                            topic
                                .breakdown
                                .iter()
                                .map(|entry| RawBreakdownEntry {
                                    kind: Some(entry.kind.clone()),
                                    correct: Some(f64::from(entry.correct)),
                                    total: Some(f64::from(entry.total)),
                                    accuracy: Some(entry.accuracy),
                                    avg_speed: Some(entry.avg_speed),
                                })
                                .collect(),
                        ),
                    })
                    .collect(),
            ),
            deep_dive: Some(RawDeepDive {
                subjects: Some(
                    summary
                        .deep_dive
                        .iter()
                        .map(|subject| RawSubjectEntry {
                            name: Some(subject.name.clone()),
                            accuracy: Some(subject.accuracy),
                            avg_speed: Some(subject.avg_speed),
                            score: Some(subject.score),
                        })
                        .collect(),
                ),
            }),
            charts: Some(RawCharts {
                radar: Some(RawChartSeries {
                    labels: Some(summary.radar.labels.clone()),
                    data: Some(summary.radar.data.clone()),
                }),
                doughnut: Some(RawChartSeries {
                    labels: Some(summary.doughnut.labels.clone()),
                    data: Some(summary.doughnut.data.clone()),
                }),
            }),
        }
    }
}
