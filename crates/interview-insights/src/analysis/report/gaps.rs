use super::super::payload::PerformanceGap;
use serde::Serialize;

/// Which explanation template a performance gap was matched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapTopic {
    JdRelevance,
    FollowUp,
    Depth,
    Behavioral,
    General,
}

impl GapTopic {
    /// Keyword table, checked in order against the lower-cased metric name.
    const KEYWORDS: [(&'static str, GapTopic); 4] = [
        ("jd relevance", GapTopic::JdRelevance),
        ("follow-up", GapTopic::FollowUp),
        ("depth", GapTopic::Depth),
        ("behavioral", GapTopic::Behavioral),
    ];

    pub fn for_metric(metric: &str) -> Self {
        let metric = metric.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| metric.contains(keyword))
            .map(|(_, topic)| *topic)
            .unwrap_or(GapTopic::General)
    }
}

pub(crate) fn explain_gap(gap: &PerformanceGap) -> (GapTopic, String) {
    let topic = GapTopic::for_metric(&gap.metric);
    let text = match topic {
        GapTopic::JdRelevance => format!(
            "Your questions currently align {}% with the job description. Aim for {}% by asking more questions that directly assess the specific skills, experience, and qualifications listed in the job posting.",
            gap.current_score, gap.target_score
        ),
        GapTopic::FollowUp => format!(
            "You're missing opportunities to dig deeper into candidate responses. Increase your follow-up rate by {} points through probing questions when candidates mention projects, experiences, or skills.",
            gap.gap
        ),
        GapTopic::Depth => "Your questions need more depth to properly assess candidates. Move from surface-level questions to ones that reveal true competency, problem-solving ability, and real-world application of skills.".to_string(),
        GapTopic::Behavioral => "Include more behavioral questions using the STAR method (Situation, Task, Action, Result) to understand how candidates have handled real situations in the past.".to_string(),
        GapTopic::General => format!(
            "This area needs improvement. Work to close the {}-point gap through focused practice and training.",
            gap.gap
        ),
    };

    (topic, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::GapSeverity;

    fn gap(metric: &str) -> PerformanceGap {
        PerformanceGap {
            metric: metric.to_string(),
            current_score: 62.0,
            target_score: 80.0,
            gap: 18.0,
            severity: GapSeverity::Moderate,
        }
    }

    #[test]
    fn metric_keywords_select_templates_in_order() {
        assert_eq!(GapTopic::for_metric("JD Relevance Score"), GapTopic::JdRelevance);
        assert_eq!(GapTopic::for_metric("Follow-up Rate"), GapTopic::FollowUp);
        assert_eq!(GapTopic::for_metric("Question DEPTH"), GapTopic::Depth);
        assert_eq!(GapTopic::for_metric("Behavioral coverage"), GapTopic::Behavioral);
        assert_eq!(GapTopic::for_metric("Unrelated Metric"), GapTopic::General);
    }

    #[test]
    fn first_matching_keyword_wins() {
        assert_eq!(
            GapTopic::for_metric("Follow-up depth"),
            GapTopic::FollowUp
        );
    }

    #[test]
    fn templates_interpolate_scores() {
        let (_, text) = explain_gap(&gap("JD Relevance Score"));
        assert!(text.starts_with("Your questions currently align 62% with the job description. Aim for 80%"));

        let (_, text) = explain_gap(&gap("Follow-up Rate"));
        assert!(text.contains("Increase your follow-up rate by 18 points"));
    }

    #[test]
    fn generic_fallback_references_supplied_gap() {
        let mut unrelated = gap("Unrelated Metric");
        unrelated.gap = 7.5;
        let (topic, text) = explain_gap(&unrelated);
        assert_eq!(topic, GapTopic::General);
        assert_eq!(
            text,
            "This area needs improvement. Work to close the 7.5-point gap through focused practice and training."
        );
    }
}
