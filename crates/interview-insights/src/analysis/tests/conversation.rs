use super::common::*;
use crate::analysis::domain::{ColorCategory, Tier};
use crate::analysis::explanation::ExplanationSource;
use crate::analysis::payload::Insight;
use crate::analysis::report::views::ConversationBody;
use crate::analysis::{assemble_conversation, AnalysisEngine};
use crate::config::DisplayConfig;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn rows_preserve_item_and_answer_order() {
    let items = transcript();
    let view = assemble_conversation(&items, &[]);

    let rows = view.body.items();
    assert_eq!(rows.len(), items.len());
    for (index, (row, item)) in rows.iter().zip(&items).enumerate() {
        assert_eq!(row.index, index);
        assert_eq!(row.key, format!("qa-item-{index}"));
        assert_eq!(row.anchor, format!("transcript-segment-{index}"));
        assert_eq!(row.question, item.question);
        assert_eq!(row.answers.len(), item.answers.len());
        for (answer_index, (answer_row, answer)) in row.answers.iter().zip(&item.answers).enumerate()
        {
            assert_eq!(answer_row.index, answer_index);
            assert_eq!(answer_row.text, answer.text);
            assert_eq!(
                answer_row.match_badge.key,
                format!("answer-match-badge-{index}-{answer_index}")
            );
            assert_eq!(answer_row.match_badge.score, answer.jd_match);
        }
    }
}

#[test]
fn question_and_answer_badges_are_classified_independently() {
    let view = assemble_conversation(&transcript(), &[]);
    let first = &view.body.items()[0];

    assert_eq!(first.relevance_badge.tier, Tier::Excellent);
    assert_eq!(first.relevance_badge.color, ColorCategory::Green);
    assert_eq!(first.relevance_badge.caption, "JD Relevance: ✅ Excellent Match (91%)");
    assert_eq!(
        first.relevance_badge.explanation_title,
        "Question Relevance to Job Description"
    );
    assert_eq!(first.speaker_line, "Recruiter • 00:01:45");

    let second_answer = &first.answers[1];
    assert_eq!(second_answer.match_badge.tier, Tier::Fair);
    assert_eq!(second_answer.match_badge.caption, "Answer Match: 🟠 Fair Match (64%)");
    assert!(second_answer
        .match_badge
        .explanation
        .starts_with("Why 64%? The answer partially addresses the question"));
    assert_eq!(second_answer.speaker_line, "Candidate • 00:02:10");
}

#[test]
fn authored_reasoning_is_displayed_verbatim() {
    let mut items = transcript();
    items[1].reasoning = Some("Off-topic small talk.".to_string());
    items[1].answers[0].reasoning = Some("Friendly but irrelevant.".to_string());

    let view = assemble_conversation(&items, &[]);
    let row = &view.body.items()[1];

    assert_eq!(row.relevance_badge.explanation, "Off-topic small talk.");
    assert_eq!(
        row.relevance_badge.explanation_source,
        ExplanationSource::Authored
    );
    assert_eq!(row.answers[0].match_badge.explanation, "Friendly but irrelevant.");
    assert_eq!(
        view.body.items()[0].relevance_badge.explanation_source,
        ExplanationSource::Synthesized
    );
}

#[test]
fn long_answers_are_previewed_without_touching_input() {
    let long_text = "a".repeat(250);
    let items = vec![qa_item(
        "Describe the incident.",
        60,
        vec![answer(&long_text, 71)],
    )];

    let view = assemble_conversation(&items, &[]);
    let answer_row = &view.body.items()[0].answers[0];

    assert!(answer_row.truncated);
    assert_eq!(answer_row.text, format!("{}...", "a".repeat(200)));
    assert_eq!(items[0].answers[0].text.len(), 250);
}

#[test]
fn preview_length_follows_display_config() {
    let items = vec![qa_item(
        "Describe the incident.",
        60,
        vec![answer("The pager went off at 3am.", 71)],
    )];
    let engine = AnalysisEngine::new(DisplayConfig {
        answer_preview_chars: 10,
    });

    let view = engine.conversation(&items, &[]);
    assert_eq!(view.body.items()[0].answers[0].text, "The pager ...");
}

#[test]
fn empty_transcript_yields_marker_not_empty_list() {
    let view = assemble_conversation(&[], &[Insight::from("Candidate was nervous")]);

    assert!(view.body.is_empty());
    match &view.body {
        ConversationBody::Empty { headline, detail } => {
            assert_eq!(*headline, "No conversation analysis available yet.");
            assert_eq!(*detail, "Analysis will appear here once processing is complete.");
        }
        other => panic!("expected empty marker, got {other:?}"),
    }

    let panel = view.insights.expect("insights still shown");
    assert_eq!(panel.rows[0].text, "Candidate was nervous");
}

#[test]
fn insights_are_keyed_and_normalized() {
    let insights: Vec<Insight> = serde_json::from_value(json!([
        "hello",
        {"description": "x"},
        {"insight": "y"},
        {"foo": 1},
        42
    ]))
    .expect("insights parse");

    let view = assemble_conversation(&transcript(), &insights);
    let panel = view.insights.expect("panel present");

    assert_eq!(panel.key, "insights-container");
    let texts: Vec<&str> = panel.rows.iter().map(|row| row.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["hello", "x", "y", r#"{"foo":1}"#, "Unable to display insight"]
    );
    assert_eq!(panel.rows[4].key, "insight-4");
}

#[test]
fn no_insights_means_no_panel() {
    let view = assemble_conversation(&transcript(), &[]);
    assert!(view.insights.is_none());
}

#[test]
fn repeated_assembly_is_identical() {
    let items = transcript();
    let insights = vec![Insight::from("steady")];
    assert_eq!(
        assemble_conversation(&items, &insights),
        assemble_conversation(&items, &insights)
    );
}
