//! Untrusted payload model for the `data` query parameter.
//!
//! Every field is optional from the renderer's point of view: the bot has
//! shipped several payload revisions and older ones omit whole sections.
//! Counts arrive as plain JSON numbers (the bot serializes some of them as
//! floats), so they deserialize as `f64` here and are rounded into integer
//! counts during normalization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPayload {
    pub user_name: Option<String>,
    pub overall_stats: Option<RawOverallStats>,
    pub coach_insight: Option<String>,
    pub performance_by_topic: Option<Vec<RawTopicEntry>>,
    pub deep_dive: Option<RawDeepDive>,
    pub charts: Option<RawCharts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOverallStats {
    pub overall_accuracy: Option<f64>,
    pub total_questions: Option<f64>,
    pub best_subject: Option<String>,
    pub total_quizzes: Option<f64>,
    pub current_streak: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTopicEntry {
    pub topic_name: Option<String>,
    pub accuracy: Option<f64>,
    pub total_correct: Option<f64>,
    pub total_questions: Option<f64>,
    pub avg_speed: Option<f64>,
    pub breakdown: Option<Vec<RawBreakdownEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBreakdownEntry {
    /// Question category ("MCQ", "Numerical", ...). `type` in the JSON.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub correct: Option<f64>,
    pub total: Option<f64>,
    pub accuracy: Option<f64>,
    pub avg_speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDeepDive {
    pub subjects: Option<Vec<RawSubjectEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSubjectEntry {
    pub name: Option<String>,
    pub accuracy: Option<f64>,
    pub avg_speed: Option<f64>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCharts {
    pub radar: Option<RawChartSeries>,
    pub doughnut: Option<RawChartSeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawChartSeries {
    pub labels: Option<Vec<String>>,
    pub data: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_all_none() {
        let raw: RawPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(raw, RawPayload::default());
    }

    #[test]
    fn breakdown_type_field_maps_to_kind() {
        let json = r#"{"performanceByTopic":[{"topicName":"Optics",
            "breakdown":[{"type":"MCQ","correct":3,"total":4}]}]}"#;
        let raw: RawPayload = serde_json::from_str(json).unwrap();
        let topics = raw.performance_by_topic.unwrap();
        let breakdown = topics[0].breakdown.as_ref().unwrap();
        assert_eq!(breakdown[0].kind.as_deref(), Some("MCQ"));
        assert_eq!(breakdown[0].correct, Some(3.0));
    }

    #[test]
    fn float_counts_are_accepted() {
        let json = r#"{"overallStats":{"totalQuestions":42.0}}"#;
        let raw: RawPayload = serde_json::from_str(json).unwrap();
        assert_eq!(raw.overall_stats.unwrap().total_questions, Some(42.0));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"overallStats":{"overallAccuracy":88.5},"futureField":true}"#;
        let raw: RawPayload = serde_json::from_str(json).unwrap();
        assert_eq!(raw.overall_stats.unwrap().overall_accuracy, Some(88.5));
    }
}
