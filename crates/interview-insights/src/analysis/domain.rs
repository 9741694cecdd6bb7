use serde::{Deserialize, Serialize};

/// Ordered score band shared by question relevance and answer quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Tier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Excellent, Self::Good, Self::Fair, Self::Poor]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Fair => "Fair Match",
            Self::Poor => "Poor Match",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "✅",
            Self::Good => "🟡",
            Self::Fair => "🟠",
            Self::Poor => "🔴",
        }
    }

    /// Inclusive lower edge of the band.
    pub const fn floor(self) -> i32 {
        match self {
            Self::Excellent => 85,
            Self::Good => 70,
            Self::Fair => 50,
            Self::Poor => 0,
        }
    }

    pub const fn color(self) -> ColorCategory {
        match self {
            Self::Excellent => ColorCategory::Green,
            Self::Good => ColorCategory::Lime,
            Self::Fair => ColorCategory::Yellow,
            Self::Poor => ColorCategory::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    Green,
    Lime,
    Yellow,
    Orange,
}

/// Which score an explanation is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationKind {
    QuestionRelevance,
    AnswerQuality,
}

impl ExplanationKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::QuestionRelevance => "Question Relevance to Job Description",
            Self::AnswerQuality => "How Well Did They Answer the Question?",
        }
    }

    pub const fn caption_prefix(self) -> &'static str {
        match self {
            Self::QuestionRelevance => "JD Relevance",
            Self::AnswerQuality => "Answer Match",
        }
    }
}

/// Display variant understood by the rendering layer's badge component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Destructive,
    Emphasized,
    Neutral,
    Muted,
}

/// Recommendation urgency as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Priority {
    pub fn variant(&self) -> BadgeVariant {
        match self {
            Self::Critical => BadgeVariant::Destructive,
            Self::High => BadgeVariant::Emphasized,
            Self::Medium | Self::Unrecognized(_) => BadgeVariant::Neutral,
            Self::Low => BadgeVariant::Muted,
        }
    }

    pub fn accent(&self) -> Option<Accent> {
        match self {
            Self::Critical => Some(Accent::Red),
            Self::High => Some(Accent::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

/// Border/icon highlight for urgent recommendation rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Red,
    Orange,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GapSeverity {
    Critical,
    Moderate,
    Minor,
    Unrecognized(String),
}

impl GapSeverity {
    pub fn variant(&self) -> BadgeVariant {
        match self {
            Self::Critical => BadgeVariant::Destructive,
            Self::Moderate => BadgeVariant::Emphasized,
            Self::Minor | Self::Unrecognized(_) => BadgeVariant::Neutral,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::Moderate => "moderate",
            Self::Minor => "minor",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for GapSeverity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Self::Critical,
            "moderate" => Self::Moderate,
            "minor" => Self::Minor,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<GapSeverity> for String {
    fn from(value: GapSeverity) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Importance {
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Importance {
    pub fn variant(&self) -> BadgeVariant {
        match self {
            Self::High => BadgeVariant::Destructive,
            Self::Medium => BadgeVariant::Emphasized,
            Self::Low | Self::Unrecognized(_) => BadgeVariant::Neutral,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Importance {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<Importance> for String {
    fn from(value: Importance) -> Self {
        value.as_str().to_string()
    }
}

/// Category of a missed follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FollowUpType {
    TechnicalDepth,
    Behavioral,
    Clarification,
    ProjectDetails,
    Quantification,
    TeamCollaboration,
    Unrecognized(String),
}

impl FollowUpType {
    /// Unrecognized categories render without a label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TechnicalDepth => "Technical Depth",
            Self::Behavioral => "Behavioral/STAR",
            Self::Clarification => "Clarification",
            Self::ProjectDetails => "Project Details",
            Self::Quantification => "Quantification",
            Self::TeamCollaboration => "Team Collaboration",
            Self::Unrecognized(_) => "",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::TechnicalDepth => "technical_depth",
            Self::Behavioral => "behavioral",
            Self::Clarification => "clarification",
            Self::ProjectDetails => "project_details",
            Self::Quantification => "quantification",
            Self::TeamCollaboration => "team_collaboration",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for FollowUpType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "technical_depth" => Self::TechnicalDepth,
            "behavioral" => Self::Behavioral,
            "clarification" => Self::Clarification,
            "project_details" => Self::ProjectDetails,
            "quantification" => Self::Quantification,
            "team_collaboration" => Self::TeamCollaboration,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<FollowUpType> for String {
    fn from(value: FollowUpType) -> Self {
        value.as_str().to_string()
    }
}

/// Summary verdict on the recruiter's overall performance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OverallRating {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
    Unrecognized(String),
}

impl OverallRating {
    /// Label, variant and icon for the summary badge; `None` suppresses it.
    pub fn badge(&self) -> Option<(&'static str, BadgeVariant, RatingIcon)> {
        match self {
            Self::Excellent => Some((
                "Excellent Performance",
                BadgeVariant::Emphasized,
                RatingIcon::Star,
            )),
            Self::Good => Some(("Good Performance", BadgeVariant::Neutral, RatingIcon::Check)),
            Self::NeedsImprovement => Some((
                "Needs Improvement",
                BadgeVariant::Muted,
                RatingIcon::TrendingUp,
            )),
            Self::Poor => Some((
                "Requires Attention",
                BadgeVariant::Destructive,
                RatingIcon::Alert,
            )),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsImprovement => "needs_improvement",
            Self::Poor => "poor",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for OverallRating {
    fn from(value: String) -> Self {
        match value.as_str() {
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            "needs_improvement" => Self::NeedsImprovement,
            "poor" => Self::Poor,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<OverallRating> for String {
    fn from(value: OverallRating) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingIcon {
    Star,
    Check,
    TrendingUp,
    Alert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_priority_falls_back_to_medium_variant() {
        let priority: Priority = serde_json::from_str("\"urgent\"").expect("priority parses");
        assert_eq!(priority, Priority::Unrecognized("urgent".to_string()));
        assert_eq!(priority.variant(), Priority::Medium.variant());
        assert!(priority.accent().is_none());
    }

    #[test]
    fn enums_round_trip_raw_text() {
        let value = serde_json::to_value(FollowUpType::from("team_collaboration".to_string()))
            .expect("serializes");
        assert_eq!(value, serde_json::json!("team_collaboration"));
        let value = serde_json::to_value(Priority::from("someday".to_string())).expect("serializes");
        assert_eq!(value, serde_json::json!("someday"));
    }

    #[test]
    fn unrecognized_rating_has_no_badge() {
        assert!(OverallRating::from("stellar".to_string()).badge().is_none());
        let (label, variant, _) = OverallRating::Poor.badge().expect("poor has a badge");
        assert_eq!(label, "Requires Attention");
        assert_eq!(variant, BadgeVariant::Destructive);
    }

    #[test]
    fn follow_up_labels_cover_every_known_type() {
        assert_eq!(FollowUpType::Behavioral.label(), "Behavioral/STAR");
        assert_eq!(FollowUpType::TechnicalDepth.label(), "Technical Depth");
        assert_eq!(FollowUpType::from("culture_fit".to_string()).label(), "");
    }
}
