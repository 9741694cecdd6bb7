use crate::infra::{engine, read_payload};
use clap::Args;
use interview_insights::analysis::report::views::{
    AnalysisReport, ConversationBody, TrainingSection,
};
use interview_insights::analysis::AnalysisPayload;
use interview_insights::config::AppConfig;
use interview_insights::error::AppError;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Path to an analysis payload (JSON)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the presentation tree as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the presentation tree as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { input, json } = args;

    let config = AppConfig::load()?;
    let payload = read_payload(&input)?;
    let report = engine(config.display).report(&payload);

    emit(&report, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let payload = demo_payload()?;
    let report = engine(config.display).report(&payload);

    if !args.json {
        println!("Interview insights demo (sample payload)\n");
    }
    emit(&report, args.json)
}

fn emit(report: &AnalysisReport, as_json: bool) -> Result<(), AppError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

pub(crate) fn demo_payload() -> Result<AnalysisPayload, AppError> {
    let raw = json!({
        "qaAnalysis": [
            {
                "question": "Can you describe a time you had to redesign a system under load?",
                "timestamp": "00:02:15",
                "relevance": 92,
                "answers": [
                    {
                        "text": "At my last company our notification service fell over every Monday morning. I moved fan-out onto a queue, added backpressure, and we went from hourly pages to none over the following quarter while traffic doubled.",
                        "timestamp": "00:02:48",
                        "jdMatch": 88,
                        "sentiment": "positive"
                    }
                ]
            },
            {
                "question": "What's your favourite programming language?",
                "timestamp": "00:07:30",
                "relevance": 48,
                "answers": [
                    { "text": "Probably Rust, for the compiler feedback.", "timestamp": "00:07:41", "jdMatch": 55 }
                ]
            }
        ],
        "insights": [
            "Strong opening question tied directly to the role's scaling requirements",
            { "description": "Second half of the interview drifted away from the job description" }
        ],
        "strengthAreas": ["Opened with a role-specific scenario question"],
        "performanceGaps": [
            { "metric": "JD Relevance Score", "currentScore": 70, "targetScore": 85, "gap": 15, "severity": "moderate" },
            { "metric": "Follow-up Rate", "currentScore": 20, "targetScore": 60, "gap": 40, "severity": "critical" }
        ],
        "trainingRecommendations": [
            {
                "area": "Follow-up questioning",
                "priority": "high",
                "issue": "Quantified claims were not explored",
                "recommendation": "Ask how outcomes were measured whenever a candidate cites an improvement",
                "resources": ["Behavioral interviewing playbook"],
                "expectedImprovement": "Follow-up rate above 50%",
                "missedFollowUps": [
                    {
                        "afterNode": "qa-0",
                        "suggestedQuestion": "How did you measure the impact?",
                        "suggestedQuestions": [
                            "How did you measure the drop in pages?",
                            "What trade-offs did backpressure introduce?"
                        ],
                        "importance": "high",
                        "reasoning": "The candidate claimed a large reliability win without evidence",
                        "answerExcerpt": "we went from hourly pages to none",
                        "followUpType": "quantification"
                    }
                ]
            }
        ],
        "overallRating": "good"
    });

    Ok(serde_json::from_value(raw)?)
}

pub(crate) fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let conversation = &report.conversation;

    out.push_str(&format!("{}\n", conversation.title));
    match &conversation.body {
        ConversationBody::Empty { headline, detail } => {
            out.push_str(&format!("  {headline}\n  {detail}\n"));
        }
        ConversationBody::Items { items } => {
            for item in items {
                out.push_str(&format!("\n[{}] \"{}\"\n", item.key, item.question));
                out.push_str(&format!(
                    "  {} | {}\n    {}\n",
                    item.speaker_line, item.relevance_badge.caption, item.relevance_badge.explanation
                ));
                for answer in &item.answers {
                    out.push_str(&format!("  > {}\n", answer.text));
                    out.push_str(&format!(
                        "    {} | {}\n      {}\n",
                        answer.speaker_line, answer.match_badge.caption, answer.match_badge.explanation
                    ));
                }
            }
        }
    }

    if let Some(panel) = &conversation.insights {
        out.push_str(&format!("\n{}\n", panel.title));
        for row in &panel.rows {
            out.push_str(&format!("- {}\n", row.text));
        }
    }

    let training = match &report.training {
        TrainingSection::Empty => return out,
        TrainingSection::Report(view) => view,
    };

    out.push_str(&format!("\n{}", training.title));
    if let Some(rating) = &training.rating {
        out.push_str(&format!(" [{}]", rating.label));
    }
    out.push('\n');

    if let Some(panel) = &training.strengths {
        out.push_str(&format!("\n{}\n", panel.title));
        for row in &panel.rows {
            out.push_str(&format!("- {}\n", row.text));
        }
    }

    if let Some(panel) = &training.performance_gaps {
        out.push_str(&format!("\n{}\n", panel.title));
        for row in &panel.rows {
            out.push_str(&format!(
                "- {} [{}]: {}\n  {}\n",
                row.metric, row.severity_label, row.progress_line, row.explanation
            ));
        }
    }

    if let Some(panel) = &training.recommendations {
        out.push_str(&format!("\n{}\n", panel.title));
        for row in &panel.rows {
            out.push_str(&format!("- {} [{}]\n", row.area, row.priority_label));
            out.push_str(&format!("  Issue: {}\n", row.issue));
            out.push_str(&format!("  Recommendation: {}\n", row.recommendation));
            out.push_str(&format!(
                "  Expected Improvement: {}\n",
                row.expected_improvement
            ));
            for resource in &row.resources {
                out.push_str(&format!("  * {}\n", resource.text));
            }
            if let Some(heading) = &row.missed_follow_ups_heading {
                out.push_str(&format!("  {heading}\n"));
            }
            for follow_up in &row.missed_follow_ups {
                let type_label = if follow_up.type_label.is_empty() {
                    String::new()
                } else {
                    format!(" {}", follow_up.type_label)
                };
                out.push_str(&format!(
                    "    [{}]{} {}\n      {}\n",
                    follow_up.importance_label,
                    type_label,
                    follow_up.after_node,
                    follow_up.reasoning
                ));
                out.push_str(&format!("      {}\n", follow_up.suggested.heading));
                for question in &follow_up.suggested.questions {
                    if follow_up.suggested.numbered {
                        out.push_str(&format!(
                            "        {}. \"{}\"\n",
                            question.number, question.text
                        ));
                    } else {
                        out.push_str(&format!("        \"{}\"\n", question.text));
                    }
                }
            }
        }
    }

    out
}
