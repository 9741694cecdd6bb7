use super::super::classifier::{badge_color_class, badge_label, classify};
use super::super::domain::ExplanationKind;
use super::super::explanation::resolve;
use super::super::payload::{Answer, Insight, QaItem};
use super::views::{
    AnswerView, ConversationAnalysisView, ConversationBody, InsightRow, InsightsPanel, QaItemView,
    ScoreBadgeView,
};
use crate::config::DisplayConfig;
use serde_json::Value;
use tracing::debug;

pub const SECTION_TITLE: &str = "Question & Answer Analysis";
pub const EMPTY_HEADLINE: &str = "No conversation analysis available yet.";
pub const EMPTY_DETAIL: &str = "Analysis will appear here once processing is complete.";
pub const INSIGHTS_TITLE: &str = "Analysis Insights";
pub const INSIGHT_FALLBACK: &str = "Unable to display insight";

/// Candidate keys for structured insights, highest priority first.
const INSIGHT_KEYS: [&str; 4] = ["description", "insight", "text", "content"];

pub(crate) fn assemble_conversation(
    items: &[QaItem],
    insights: &[Insight],
    display: &DisplayConfig,
) -> ConversationAnalysisView {
    let body = if items.is_empty() {
        ConversationBody::Empty {
            headline: EMPTY_HEADLINE,
            detail: EMPTY_DETAIL,
        }
    } else {
        ConversationBody::Items {
            items: items
                .iter()
                .enumerate()
                .map(|(index, item)| item_view(index, item, display))
                .collect(),
        }
    };

    let insights = if insights.is_empty() {
        None
    } else {
        Some(InsightsPanel {
            key: "insights-container",
            title: INSIGHTS_TITLE,
            rows: insights
                .iter()
                .enumerate()
                .map(|(index, insight)| InsightRow {
                    key: format!("insight-{index}"),
                    index,
                    text: normalize_insight(insight),
                })
                .collect(),
        })
    };

    debug!(
        items = items.len(),
        insights = insights.as_ref().map_or(0, |panel| panel.rows.len()),
        "assembled conversation analysis"
    );

    ConversationAnalysisView {
        title: SECTION_TITLE,
        body,
        insights,
    }
}

fn item_view(index: usize, item: &QaItem, display: &DisplayConfig) -> QaItemView {
    let answers = item
        .answers
        .iter()
        .enumerate()
        .map(|(answer_index, answer)| answer_view(index, answer_index, answer, display))
        .collect();

    QaItemView {
        key: format!("qa-item-{index}"),
        anchor: format!("transcript-segment-{index}"),
        index,
        question: item.question.clone(),
        timestamp: item.timestamp.clone(),
        speaker_line: format!("Recruiter • {}", item.timestamp),
        relevance_badge: score_badge(
            format!("relevance-badge-{index}"),
            ExplanationKind::QuestionRelevance,
            item.relevance,
            item.reasoning.as_deref(),
        ),
        answers,
    }
}

fn answer_view(
    item_index: usize,
    index: usize,
    answer: &Answer,
    display: &DisplayConfig,
) -> AnswerView {
    let (text, truncated) = preview(&answer.text, display.answer_preview_chars);

    AnswerView {
        index,
        text,
        truncated,
        timestamp: answer.timestamp.clone(),
        speaker_line: format!("Candidate • {}", answer.timestamp),
        match_badge: score_badge(
            format!("answer-match-badge-{item_index}-{index}"),
            ExplanationKind::AnswerQuality,
            answer.jd_match,
            answer.reasoning.as_deref(),
        ),
        match_score: answer.match_score,
        match_level: answer.match_level.clone(),
        match_explanation: answer.match_explanation.clone(),
        sentiment: answer.sentiment.clone(),
    }
}

fn score_badge(
    key: String,
    kind: ExplanationKind,
    score: i32,
    reasoning: Option<&str>,
) -> ScoreBadgeView {
    let tier = classify(score);
    let label = badge_label(score);
    let explanation = resolve(kind, score, reasoning);

    ScoreBadgeView {
        key,
        score,
        tier,
        color: tier.color(),
        color_class: badge_color_class(tier),
        caption: format!("{}: {label}", kind.caption_prefix()),
        label,
        explanation_title: kind.title(),
        explanation: explanation.text,
        explanation_source: explanation.source,
    }
}

/// Shortens `text` to `limit` characters plus an ellipsis.
pub(crate) fn preview(text: &str, limit: usize) -> (String, bool) {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => (format!("{}...", &text[..cut]), true),
        None => (text.to_string(), false),
    }
}

// Blank strings, zero, false and null do not count as a value for the key.
fn candidate_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Reduces any insight shape to one non-empty display string.
pub fn normalize_insight(insight: &Insight) -> String {
    let resolved = match insight {
        Insight::Text(text) if !text.is_empty() => Some(text.clone()),
        Insight::Text(_) => None,
        Insight::Structured(map) => INSIGHT_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(candidate_text))
            .or_else(|| serde_json::to_string(map).ok()),
        Insight::Other(value @ Value::Array(_)) => serde_json::to_string(value).ok(),
        Insight::Other(_) => None,
    };

    resolved.unwrap_or_else(|| {
        debug!("insight has no textual form; using fallback");
        INSIGHT_FALLBACK.to_string()
    })
}
