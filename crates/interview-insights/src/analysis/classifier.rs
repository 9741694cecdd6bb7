use super::domain::Tier;

/// Maps a 0-100 score onto its tier. Out-of-range scores land in the nearest
/// boundary tier.
pub fn classify(score: i32) -> Tier {
    if score >= 85 {
        Tier::Excellent
    } else if score >= 70 {
        Tier::Good
    } else if score >= 50 {
        Tier::Fair
    } else {
        Tier::Poor
    }
}

/// Style classes for a tier's badge, light and dark variants.
pub fn badge_color_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-200 border-green-200 dark:border-green-700",
        Tier::Good => "bg-lime-100 dark:bg-lime-900/30 text-lime-800 dark:text-lime-200 border-lime-200 dark:border-lime-700",
        Tier::Fair => "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-800 dark:text-yellow-200 border-yellow-200 dark:border-yellow-700",
        Tier::Poor => "bg-orange-100 dark:bg-orange-900/30 text-orange-800 dark:text-orange-200 border-orange-200 dark:border-orange-700",
    }
}

pub fn badge_label(score: i32) -> String {
    let tier = classify(score);
    format!("{} {} ({score}%)", tier.emoji(), tier.label())
}
