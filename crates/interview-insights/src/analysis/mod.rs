//! Classification and narrative synthesis for interview-analysis output.
//!
//! Every operation here is a pure function of its input: the engine only
//! classifies scores, resolves explanations, and arranges the result into a
//! presentation tree keyed by stable, index-based identifiers.

pub mod classifier;
pub mod domain;
pub mod explanation;
pub mod payload;
pub mod report;

#[cfg(test)]
mod tests;

pub use classifier::{badge_color_class, badge_label, classify};
pub use domain::{
    Accent, BadgeVariant, ColorCategory, ExplanationKind, FollowUpType, GapSeverity, Importance,
    OverallRating, Priority, RatingIcon, Tier,
};
pub use explanation::{explain, Explanation, ExplanationSource};
pub use payload::{
    AnalysisPayload, Answer, ConversationInput, Insight, MissedFollowUp, OneOrMany,
    PayloadError, PerformanceGap, QaItem, TrainingInput, TrainingRecommendation,
};
pub use report::views::{AnalysisReport, ConversationAnalysisView, TrainingSection};
pub use report::{normalize_insight, GapTopic};

use crate::config::DisplayConfig;

/// Stateless assembler applying display settings to analysis payloads.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    display: DisplayConfig,
}

impl AnalysisEngine {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn conversation(&self, items: &[QaItem], insights: &[Insight]) -> ConversationAnalysisView {
        report::assemble_conversation(items, insights, &self.display)
    }

    pub fn training(&self, input: &TrainingInput) -> TrainingSection {
        report::assemble_training(
            &input.strength_areas,
            &input.performance_gaps,
            &input.training_recommendations,
            input.overall_rating.as_ref(),
        )
    }

    pub fn report(&self, payload: &AnalysisPayload) -> AnalysisReport {
        AnalysisReport {
            conversation: self.conversation(
                &payload.conversation.qa_analysis,
                &payload.conversation.insights,
            ),
            training: self.training(&payload.training),
        }
    }
}

/// Conversation tree with default display settings.
pub fn assemble_conversation(items: &[QaItem], insights: &[Insight]) -> ConversationAnalysisView {
    AnalysisEngine::default().conversation(items, insights)
}

/// Training tree; `TrainingSection::Empty` when there are neither strengths
/// nor recommendations, whatever the gaps.
pub fn assemble_training(
    strengths: &[String],
    gaps: &[PerformanceGap],
    recommendations: &[TrainingRecommendation],
    overall_rating: Option<&OverallRating>,
) -> TrainingSection {
    report::assemble_training(strengths, gaps, recommendations, overall_rating)
}
