//! Inbound shapes produced by the upstream analysis process.
//!
//! Fields beyond the ones modelled here are ignored so newer upstream
//! payloads keep deserializing. Required identity and score fields are
//! enforced by serde at the boundary; everything optional has a default.

use super::domain::{FollowUpType, GapSeverity, Importance, OverallRating, Priority};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

/// Boundary validation failure for an inbound payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed analysis payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed to read analysis payload: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, PayloadError> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_reader<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<T, PayloadError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_json(&raw)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaItem {
    pub question: String,
    pub timestamp: String,
    pub relevance: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Chronological; order is preserved through assembly.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub timestamp: String,
    pub jd_match: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// An upstream insight whose shape is not fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insight {
    Text(String),
    Structured(Map<String, Value>),
    Other(Value),
}

impl From<&str> for Insight {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Value> for Insight {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Structured(map),
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceGap {
    pub metric: String,
    pub current_score: f64,
    pub target_score: f64,
    /// Taken as supplied; never recomputed from the two scores.
    pub gap: f64,
    pub severity: GapSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecommendation {
    pub area: String,
    pub priority: Priority,
    pub issue: String,
    pub recommendation: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub expected_improvement: String,
    #[serde(default)]
    pub missed_follow_ups: Vec<MissedFollowUp>,
}

/// A single value or a non-empty list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMissedFollowUp", rename_all = "camelCase")]
pub struct MissedFollowUp {
    pub after_node: String,
    pub suggested: OneOrMany<String>,
    pub importance: Importance,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_type: Option<FollowUpType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMissedFollowUp {
    #[serde(default)]
    after_node: String,
    #[serde(default)]
    suggested_question: String,
    #[serde(default)]
    suggested_questions: Option<Vec<String>>,
    importance: Importance,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    specific_context: Option<String>,
    #[serde(default)]
    answer_excerpt: Option<String>,
    #[serde(default)]
    follow_up_type: Option<FollowUpType>,
}

impl From<RawMissedFollowUp> for MissedFollowUp {
    fn from(raw: RawMissedFollowUp) -> Self {
        let suggested = match raw.suggested_questions {
            Some(questions) if !questions.is_empty() => OneOrMany::Many(questions),
            _ => OneOrMany::One(raw.suggested_question),
        };

        Self {
            after_node: raw.after_node,
            suggested,
            importance: raw.importance,
            reasoning: raw.reasoning,
            specific_context: raw.specific_context,
            answer_excerpt: raw.answer_excerpt,
            follow_up_type: raw.follow_up_type,
        }
    }
}

/// Question/answer transcript plus free-form insights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationInput {
    #[serde(default)]
    pub qa_analysis: Vec<QaItem>,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

impl ConversationInput {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        parse_json(raw)
    }
}

/// Strengths, gaps and recommendations derived for the recruiter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingInput {
    #[serde(default)]
    pub strength_areas: Vec<String>,
    #[serde(default)]
    pub performance_gaps: Vec<PerformanceGap>,
    #[serde(default, alias = "recommendations")]
    pub training_recommendations: Vec<TrainingRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<OverallRating>,
}

impl TrainingInput {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        parse_json(raw)
    }
}

/// Complete upstream payload for one dashboard render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(flatten)]
    pub conversation: ConversationInput,
    #[serde(flatten)]
    pub training: TrainingInput,
}

impl AnalysisPayload {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        parse_json(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PayloadError> {
        parse_reader(reader)
    }
}
