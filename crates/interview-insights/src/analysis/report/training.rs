use super::super::domain::OverallRating;
use super::super::payload::{MissedFollowUp, PerformanceGap, TrainingRecommendation};
use super::gaps::explain_gap;
use super::views::{
    GapRow, GapsPanel, MissedFollowUpRow, RatingBadgeView, RecommendationRow,
    RecommendationsPanel, ResourceRow, StrengthRow, StrengthsPanel, SuggestedQuestionRow,
    SuggestedQuestionsView, TrainingReportView, TrainingSection,
};
use tracing::debug;

pub const SECTION_TITLE: &str = "Recruiter Training & Development";
pub const STRENGTHS_TITLE: &str = "Areas of Strength";
pub const GAPS_TITLE: &str = "Performance Gaps";
pub const GAPS_DESCRIPTION: &str = "These metrics show areas where your interview performance can be improved. Scores are out of 100, and gaps show how many points below the target you currently are.";
pub const RECOMMENDATIONS_TITLE: &str = "Action Plan & Recommendations";

pub(crate) fn assemble_training(
    strengths: &[String],
    gaps: &[PerformanceGap],
    recommendations: &[TrainingRecommendation],
    overall_rating: Option<&OverallRating>,
) -> TrainingSection {
    // Gaps alone never warrant the section.
    if recommendations.is_empty() && strengths.is_empty() {
        debug!(
            gaps = gaps.len(),
            "training section suppressed: no strengths or recommendations"
        );
        return TrainingSection::Empty;
    }

    let rating = overall_rating.and_then(|rating| {
        rating.badge().map(|(label, variant, icon)| RatingBadgeView {
            key: "overall-rating-badge",
            rating: rating.clone(),
            label,
            variant,
            icon,
        })
    });

    let strengths = (!strengths.is_empty()).then(|| StrengthsPanel {
        title: STRENGTHS_TITLE,
        rows: strengths
            .iter()
            .enumerate()
            .map(|(index, text)| StrengthRow {
                key: format!("strength-{index}"),
                index,
                text: text.clone(),
            })
            .collect(),
    });

    let performance_gaps = (!gaps.is_empty()).then(|| GapsPanel {
        title: GAPS_TITLE,
        description: GAPS_DESCRIPTION,
        rows: gaps.iter().enumerate().map(gap_row).collect(),
    });

    let recommendations = (!recommendations.is_empty()).then(|| RecommendationsPanel {
        title: RECOMMENDATIONS_TITLE,
        rows: recommendations
            .iter()
            .enumerate()
            .map(recommendation_row)
            .collect(),
    });

    debug!(
        rating = rating.is_some(),
        strengths = strengths.as_ref().map_or(0, |panel| panel.rows.len()),
        gaps = performance_gaps.as_ref().map_or(0, |panel| panel.rows.len()),
        recommendations = recommendations.as_ref().map_or(0, |panel| panel.rows.len()),
        "assembled training recommendations"
    );

    TrainingSection::Report(TrainingReportView {
        title: SECTION_TITLE,
        rating,
        strengths,
        performance_gaps,
        recommendations,
    })
}

fn gap_row((index, gap): (usize, &PerformanceGap)) -> GapRow {
    let (topic, explanation) = explain_gap(gap);

    GapRow {
        key: format!("performance-gap-{index}"),
        index,
        metric: gap.metric.clone(),
        current_score: gap.current_score,
        target_score: gap.target_score,
        gap: gap.gap,
        progress_line: format!(
            "Current: {} → Target: {} (Gap: {} points)",
            gap.current_score, gap.target_score, gap.gap
        ),
        severity: gap.severity.clone(),
        severity_label: gap.severity.as_str().to_string(),
        severity_variant: gap.severity.variant(),
        topic,
        explanation,
    }
}

fn recommendation_row((index, rec): (usize, &TrainingRecommendation)) -> RecommendationRow {
    let resources = rec
        .resources
        .iter()
        .enumerate()
        .map(|(resource_index, text)| ResourceRow {
            key: format!("resource-{index}-{resource_index}"),
            index: resource_index,
            text: text.clone(),
        })
        .collect();

    let missed_follow_ups: Vec<MissedFollowUpRow> = rec
        .missed_follow_ups
        .iter()
        .enumerate()
        .map(follow_up_row)
        .collect();

    let missed_follow_ups_heading = (!missed_follow_ups.is_empty()).then(|| {
        format!(
            "Specific Missed Opportunities ({})",
            missed_follow_ups.len()
        )
    });

    RecommendationRow {
        key: format!("recommendation-{index}"),
        index,
        area: rec.area.clone(),
        priority: rec.priority.clone(),
        priority_label: rec.priority.as_str().to_uppercase(),
        priority_badge_key: format!("priority-badge-{index}"),
        priority_variant: rec.priority.variant(),
        accent: rec.priority.accent(),
        issue: rec.issue.clone(),
        recommendation: rec.recommendation.clone(),
        expected_improvement: rec.expected_improvement.clone(),
        resources,
        missed_follow_ups_heading,
        missed_follow_ups,
    }
}

fn follow_up_row((index, follow_up): (usize, &MissedFollowUp)) -> MissedFollowUpRow {
    MissedFollowUpRow {
        key: format!("followup-{index}"),
        index,
        after_node: follow_up.after_node.clone(),
        importance: follow_up.importance.clone(),
        importance_label: follow_up.importance.as_str().to_uppercase(),
        importance_variant: follow_up.importance.variant(),
        follow_up_type: follow_up.follow_up_type.clone(),
        type_label: follow_up
            .follow_up_type
            .as_ref()
            .map_or("", |kind| kind.label()),
        context: follow_up.specific_context.clone(),
        answer_excerpt: follow_up.answer_excerpt.clone(),
        reasoning: follow_up.reasoning.clone(),
        suggested: suggested_questions(follow_up),
    }
}

fn suggested_questions(follow_up: &MissedFollowUp) -> SuggestedQuestionsView {
    let numbered = follow_up.suggested.is_many();
    let heading = if numbered {
        "Suggested Follow-up Questions:"
    } else {
        "Suggested Question:"
    };

    SuggestedQuestionsView {
        heading,
        numbered,
        questions: follow_up
            .suggested
            .as_slice()
            .iter()
            .enumerate()
            .map(|(position, text)| SuggestedQuestionRow {
                number: position + 1,
                text: text.clone(),
            })
            .collect(),
    }
}
