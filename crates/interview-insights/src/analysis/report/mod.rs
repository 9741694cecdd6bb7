mod conversation;
mod gaps;
mod training;
pub mod views;

pub use conversation::{normalize_insight, INSIGHT_FALLBACK};
pub use gaps::GapTopic;

pub(crate) use conversation::assemble_conversation;
pub(crate) use training::assemble_training;
