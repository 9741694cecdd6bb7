use interview_insights::analysis::{AnalysisEngine, AnalysisPayload, PayloadError, Tier};
use interview_insights::config::DisplayConfig;
use serde_json::{json, Value};

fn sample_payload() -> Value {
    json!({
        "sessionId": "9b1c",
        "qaAnalysis": [
            {
                "question": "Tell me about a production incident you owned.",
                "timestamp": "00:03:12",
                "relevance": 86,
                "answers": [
                    {
                        "text": "Our checkout latency spiked after a deploy; I rolled back and added canaries.",
                        "timestamp": "00:03:40",
                        "jdMatch": 78,
                        "matchLevel": "strong",
                        "sentiment": "confident"
                    }
                ]
            },
            {
                "question": "Where did you grow up?",
                "timestamp": "00:09:02",
                "relevance": 12,
                "reasoning": "Personal question with no bearing on the role.",
                "answers": []
            }
        ],
        "insights": [
            "Recruiter dominated the first five minutes",
            { "content": "Candidate quantified impact twice", "score": 3 },
            false
        ],
        "strengthAreas": ["Put the candidate at ease"],
        "performanceGaps": [
            { "metric": "Behavioral Question Ratio", "currentScore": 20, "targetScore": 40, "gap": 20, "severity": "moderate" }
        ],
        "trainingRecommendations": [
            {
                "area": "Probing",
                "priority": "critical",
                "issue": "Answers were accepted at face value",
                "recommendation": "Ask for metrics after every project mention",
                "resources": ["Probing question bank"],
                "expectedImprovement": "Follow-up rate up 30%",
                "missedFollowUps": [
                    {
                        "afterNode": "qa-0",
                        "suggestedQuestion": "How did you detect the spike?",
                        "importance": "medium",
                        "reasoning": "Detection speed shows operational maturity",
                        "answerExcerpt": "I rolled back and added canaries",
                        "followUpType": "quantification"
                    }
                ]
            }
        ],
        "overallRating": "needs_improvement"
    })
}

#[test]
fn full_payload_produces_stable_tree() {
    let payload: AnalysisPayload =
        serde_json::from_value(sample_payload()).expect("payload deserializes");
    let report = AnalysisEngine::default().report(&payload);

    let items = report.conversation.body.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].relevance_badge.tier, Tier::Excellent);
    assert_eq!(items[0].answers[0].match_badge.tier, Tier::Good);
    assert_eq!(items[0].answers[0].match_level.as_deref(), Some("strong"));
    assert_eq!(
        items[1].relevance_badge.explanation,
        "Personal question with no bearing on the role."
    );

    let insights = report.conversation.insights.as_ref().expect("insights");
    assert_eq!(insights.rows[1].text, "Candidate quantified impact twice");
    assert_eq!(insights.rows[2].text, "Unable to display insight");

    let training = report.training.report().expect("training report");
    let rating = training.rating.as_ref().expect("rating badge");
    assert_eq!(rating.label, "Needs Improvement");
    let gap = &training.performance_gaps.as_ref().expect("gaps").rows[0];
    assert!(gap.explanation.contains("STAR method"));
    let follow_up = &training.recommendations.as_ref().expect("recommendations").rows[0]
        .missed_follow_ups[0];
    assert_eq!(follow_up.type_label, "Quantification");
    assert_eq!(follow_up.suggested.questions.len(), 1);
    assert_eq!(
        follow_up.suggested.questions[0].text,
        "How did you detect the spike?"
    );
}

#[test]
fn serialized_tree_exposes_index_keys() {
    let payload: AnalysisPayload =
        serde_json::from_value(sample_payload()).expect("payload deserializes");
    let engine = AnalysisEngine::default();

    let first = serde_json::to_value(engine.report(&payload)).expect("report serializes");
    let second = serde_json::to_value(engine.report(&payload)).expect("report serializes");
    assert_eq!(first, second);

    assert_eq!(first["conversation"]["body"]["state"], "items");
    assert_eq!(first["conversation"]["body"]["items"][1]["key"], "qa-item-1");
    assert_eq!(
        first["conversation"]["body"]["items"][0]["answers"][0]["match_badge"]["key"],
        "answer-match-badge-0-0"
    );
    assert_eq!(first["training"]["state"], "report");
    assert_eq!(
        first["training"]["recommendations"]["rows"][0]["key"],
        "recommendation-0"
    );
    assert_eq!(
        first["training"]["recommendations"]["rows"][0]["priority_variant"],
        "destructive"
    );
}

#[test]
fn empty_payload_yields_both_empty_markers() {
    let payload = AnalysisPayload::from_json("{}").expect("empty payload parses");
    let report = AnalysisEngine::new(DisplayConfig::default()).report(&payload);

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["conversation"]["body"]["state"], "empty");
    assert_eq!(value["training"], json!({ "state": "empty" }));
    assert!(value["conversation"].get("insights").is_none());
}

#[test]
fn ill_typed_score_is_rejected() {
    let raw = r#"{"qaAnalysis": [{"question": "q", "timestamp": "t", "relevance": "high", "answers": []}]}"#;
    let err = AnalysisPayload::from_json(raw).expect_err("relevance must be numeric");
    assert!(matches!(err, PayloadError::Malformed(_)));
}
