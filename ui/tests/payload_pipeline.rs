//! End-to-end pipeline check: a percent-encoded bot link goes through
//! acquisition and normalization and comes out fully populated, while broken
//! links land on the right error kind.

use ui::core::acquire::{acquire, AcquisitionError};
use ui::core::charts::{ChartKind, ChartRegistry, ChartSpec};
use ui::core::host::Command;
use ui::core::summary::PLACEHOLDER;

/// Percent-encode the way the bot does when it builds the mini-app link.
fn encode_query(json: &str) -> String {
    format!("?data={}", urlencoding::encode(json))
}

#[test]
fn bot_link_renders_end_to_end() {
    let json = r#"{
        "userName": "Asha",
        "overallStats": {"overallAccuracy": 81.25, "totalQuestions": 160, "bestSubject": "Physics"},
        "coachInsight": "Numericals are costing you time.",
        "performanceByTopic": [
            {"topicName": "Optics", "accuracy": 75.0, "totalCorrect": 9, "totalQuestions": 12,
             "avgSpeed": 41.5,
             "breakdown": [{"type": "MCQ", "correct": 6, "total": 8, "accuracy": 75.0, "avgSpeed": 38.0}]},
            {"topicName": "Waves", "accuracy": 60.0, "totalCorrect": 6, "totalQuestions": 10,
             "avgSpeed": 52.0, "breakdown": []}
        ],
        "deepDive": {"subjects": [{"name": "Physics", "accuracy": 88.0}]},
        "charts": {"radar": {"labels": ["Physics", "Chemistry"], "data": [88.0, 74.5]}}
    }"#;

    let summary = acquire(&encode_query(json)).unwrap().normalize();

    assert_eq!(summary.user_name, "Asha");
    assert_eq!(summary.overall.total_questions, 160);
    // Fields the bot never sent degrade to their defaults.
    assert_eq!(summary.overall.total_quizzes, 0);
    assert_eq!(summary.overall.current_streak, 0);
    assert_eq!(summary.topics.len(), 2);
    assert_eq!(summary.topics[0].breakdown.len(), 1);
    assert!(summary.topics[1].breakdown.is_empty());
    assert_eq!(summary.deep_dive[0].avg_speed, 0.0);
    assert_eq!(summary.radar.labels.len(), 2);
    assert!(summary.doughnut.is_empty());
}

#[test]
fn minimal_payload_never_panics_the_renderer() {
    let summary = acquire(&encode_query("{}")).unwrap().normalize();
    assert_eq!(summary.user_name, PLACEHOLDER);
    assert_eq!(summary.overall.best_subject, PLACEHOLDER);
    assert!(summary.topics.is_empty());
}

#[test]
fn broken_links_map_to_typed_errors() {
    assert_eq!(acquire("?data="), Err(AcquisitionError::MissingParameter));
    assert_eq!(acquire("?other=1"), Err(AcquisitionError::MissingParameter));
    assert!(matches!(
        acquire("?data=%7Binvalid%7D"),
        Err(AcquisitionError::MalformedJson(_))
    ));
}

#[test]
fn repeated_renders_keep_one_chart_per_canvas() {
    let mut registry = ChartRegistry::default();
    let series = ChartSpec {
        kind: ChartKind::Radar,
        labels: vec!["Physics".into()],
        data: vec![88.0],
    };

    for _ in 0..50 {
        registry.bind("radar-chart", series.clone());
        registry.bind("doughnut-chart", series.clone());
    }

    assert_eq!(registry.len(), 2);
}

#[test]
fn quick_actions_speak_the_bot_protocol() {
    let expected = ["/todayquiz", "/listfile", "/mystats", "/group link open"];
    let actual: Vec<&str> = Command::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(actual, expected);
}
