use crate::analysis::domain::{FollowUpType, GapSeverity, Importance, Priority};
use crate::analysis::payload::{
    Answer, MissedFollowUp, OneOrMany, PerformanceGap, QaItem, TrainingRecommendation,
};

pub(super) fn answer(text: &str, jd_match: i32) -> Answer {
    Answer {
        text: text.to_string(),
        timestamp: "00:02:10".to_string(),
        jd_match,
        match_score: None,
        match_level: None,
        match_explanation: None,
        sentiment: None,
        reasoning: None,
    }
}

pub(super) fn qa_item(question: &str, relevance: i32, answers: Vec<Answer>) -> QaItem {
    QaItem {
        question: question.to_string(),
        timestamp: "00:01:45".to_string(),
        relevance,
        reasoning: None,
        answers,
    }
}

pub(super) fn transcript() -> Vec<QaItem> {
    vec![
        qa_item(
            "Walk me through how you scaled the payments service.",
            91,
            vec![
                answer("We split the ledger writes onto a queue.", 88),
                answer("Then we sharded Postgres by merchant.", 64),
            ],
        ),
        qa_item("What do you do on weekends?", 22, vec![answer("Hiking.", 40)]),
        qa_item("How do you handle code review disagreements?", 74, Vec::new()),
    ]
}

pub(super) fn gap(metric: &str, severity: GapSeverity) -> PerformanceGap {
    PerformanceGap {
        metric: metric.to_string(),
        current_score: 55.0,
        target_score: 80.0,
        gap: 25.0,
        severity,
    }
}

pub(super) fn follow_up(suggested: OneOrMany<String>) -> MissedFollowUp {
    MissedFollowUp {
        after_node: "qa-1".to_string(),
        suggested,
        importance: Importance::High,
        reasoning: "The candidate mentioned a migration without detail.".to_string(),
        specific_context: Some("Discussing the Kafka rollout".to_string()),
        answer_excerpt: None,
        follow_up_type: Some(FollowUpType::TechnicalDepth),
    }
}

pub(super) fn recommendation(area: &str, priority: Priority) -> TrainingRecommendation {
    TrainingRecommendation {
        area: area.to_string(),
        priority,
        issue: "Questions stay at surface level".to_string(),
        recommendation: "Prepare two probing questions per competency".to_string(),
        resources: vec![
            "Structured interviewing guide".to_string(),
            "STAR method workshop".to_string(),
        ],
        expected_improvement: "+15 points in question depth".to_string(),
        missed_follow_ups: Vec::new(),
    }
}
