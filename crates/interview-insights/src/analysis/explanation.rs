use super::classifier::classify;
use super::domain::{ExplanationKind, Tier};
use serde::Serialize;

/// Where a displayed explanation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationSource {
    Authored,
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub text: String,
    pub source: ExplanationSource,
}

/// Resolves the text shown next to a score. Non-empty authored reasoning is
/// returned untouched; otherwise a fixed template for the score's tier is used.
pub fn explain(kind: ExplanationKind, score: i32, authored: Option<&str>) -> String {
    resolve(kind, score, authored).text
}

pub fn resolve(kind: ExplanationKind, score: i32, authored: Option<&str>) -> Explanation {
    match authored {
        Some(reasoning) if !reasoning.is_empty() => Explanation {
            text: reasoning.to_string(),
            source: ExplanationSource::Authored,
        },
        _ => Explanation {
            text: format!("Why {score}%? {}", rationale(kind, classify(score))),
            source: ExplanationSource::Synthesized,
        },
    }
}

fn rationale(kind: ExplanationKind, tier: Tier) -> &'static str {
    match (kind, tier) {
        (ExplanationKind::QuestionRelevance, Tier::Excellent) => {
            "This question fully aligns with the job description, targeting critical competencies and core responsibilities. It effectively evaluates the candidate's ability to perform key functions of the role."
        }
        (ExplanationKind::QuestionRelevance, Tier::Good) => {
            "This question covers most job requirements but could be more specific in certain areas. It addresses important skills mentioned in the JD but may lack some depth or miss minor details."
        }
        (ExplanationKind::QuestionRelevance, Tier::Fair) => {
            "This question is partially relevant, touching on some job requirements but missing important aspects. Consider focusing more directly on the specific technical skills or key responsibilities outlined in the JD."
        }
        (ExplanationKind::QuestionRelevance, Tier::Poor) => {
            "This question has minimal connection to the job description. It doesn't effectively assess the candidate's fit for the role's core functions and required competencies. Align questions more closely with JD requirements."
        }
        (ExplanationKind::AnswerQuality, Tier::Excellent) => {
            "The candidate's answer comprehensively and directly addresses the recruiter's question. The response demonstrates clear understanding, provides relevant examples, and covers all key points asked."
        }
        (ExplanationKind::AnswerQuality, Tier::Good) => {
            "The answer covers the main points of the question with good clarity. The candidate understood the question and provided relevant information, though some details could be more specific."
        }
        (ExplanationKind::AnswerQuality, Tier::Fair) => {
            "The answer partially addresses the question but misses some important aspects or lacks clarity. The candidate understood the general intent but didn't fully address all parts of the question."
        }
        (ExplanationKind::AnswerQuality, Tier::Poor) => {
            "The answer does not properly address the recruiter's question. The candidate either misunderstood the question or provided information unrelated to what was asked."
        }
    }
}
