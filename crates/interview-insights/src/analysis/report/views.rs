use super::super::domain::{
    Accent, BadgeVariant, ColorCategory, FollowUpType, GapSeverity, Importance, OverallRating,
    Priority, RatingIcon, Tier,
};
use super::super::explanation::ExplanationSource;
use super::gaps::GapTopic;
use serde::Serialize;

/// Classified score with everything a badge and its tooltip need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBadgeView {
    pub key: String,
    pub score: i32,
    pub tier: Tier,
    pub color: ColorCategory,
    pub color_class: &'static str,
    pub label: String,
    pub caption: String,
    pub explanation_title: &'static str,
    pub explanation: String,
    pub explanation_source: ExplanationSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerView {
    pub index: usize,
    pub text: String,
    pub truncated: bool,
    pub timestamp: String,
    pub speaker_line: String,
    pub match_badge: ScoreBadgeView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QaItemView {
    pub key: String,
    pub anchor: String,
    pub index: usize,
    pub question: String,
    pub timestamp: String,
    pub speaker_line: String,
    pub relevance_badge: ScoreBadgeView,
    pub answers: Vec<AnswerView>,
}

/// Item rows, or the marker telling the renderer analysis is not available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConversationBody {
    Empty {
        headline: &'static str,
        detail: &'static str,
    },
    Items {
        items: Vec<QaItemView>,
    },
}

impl ConversationBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn items(&self) -> &[QaItemView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Items { items } => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightRow {
    pub key: String,
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsPanel {
    pub key: &'static str,
    pub title: &'static str,
    pub rows: Vec<InsightRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationAnalysisView {
    pub title: &'static str,
    pub body: ConversationBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightsPanel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingBadgeView {
    pub key: &'static str,
    pub rating: OverallRating,
    pub label: &'static str,
    pub variant: BadgeVariant,
    pub icon: RatingIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthRow {
    pub key: String,
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapRow {
    pub key: String,
    pub index: usize,
    pub metric: String,
    pub current_score: f64,
    pub target_score: f64,
    pub gap: f64,
    pub progress_line: String,
    pub severity: GapSeverity,
    pub severity_label: String,
    pub severity_variant: BadgeVariant,
    pub topic: GapTopic,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRow {
    pub key: String,
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedQuestionRow {
    pub number: usize,
    pub text: String,
}

/// One rendering path for both the numbered list and the legacy single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedQuestionsView {
    pub heading: &'static str,
    pub numbered: bool,
    pub questions: Vec<SuggestedQuestionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissedFollowUpRow {
    pub key: String,
    pub index: usize,
    pub after_node: String,
    pub importance: Importance,
    pub importance_label: String,
    pub importance_variant: BadgeVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_type: Option<FollowUpType>,
    pub type_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_excerpt: Option<String>,
    pub reasoning: String,
    pub suggested: SuggestedQuestionsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRow {
    pub key: String,
    pub index: usize,
    pub area: String,
    pub priority: Priority,
    pub priority_label: String,
    pub priority_badge_key: String,
    pub priority_variant: BadgeVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
    pub issue: String,
    pub recommendation: String,
    pub expected_improvement: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_follow_ups_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missed_follow_ups: Vec<MissedFollowUpRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthsPanel {
    pub title: &'static str,
    pub rows: Vec<StrengthRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapsPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: Vec<GapRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationsPanel {
    pub title: &'static str,
    pub rows: Vec<RecommendationRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReportView {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingBadgeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<StrengthsPanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_gaps: Option<GapsPanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<RecommendationsPanel>,
}

/// Training tree, or the marker for a payload with nothing worth showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TrainingSection {
    Empty,
    Report(TrainingReportView),
}

impl TrainingSection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn report(&self) -> Option<&TrainingReportView> {
        match self {
            Self::Empty => None,
            Self::Report(view) => Some(view),
        }
    }
}

/// Full presentation tree for one dashboard render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub conversation: ConversationAnalysisView,
    pub training: TrainingSection,
}
