use docquest::application::services::{NormalizeError, normalize_question_groups};
use docquest::domain::QuestionGroup;

#[test]
fn given_distinct_precursors_when_normalizing_then_one_group_per_entry_in_order() {
    let raw = r#"[
        {"precursor": "Passage A", "questions": ["A1"]},
        {"precursor": "Passage B", "questions": ["B1", "B2"]},
        {"precursor": "Passage C", "questions": []}
    ]"#;

    let groups = normalize_question_groups(raw).unwrap();

    assert_eq!(
        groups,
        vec![
            QuestionGroup::with_questions(Some("Passage A"), ["A1"]),
            QuestionGroup::with_questions(Some("Passage B"), ["B1", "B2"]),
            QuestionGroup::with_questions(Some("Passage C"), Vec::<String>::new()),
        ]
    );
}

#[test]
fn given_repeated_precursor_when_normalizing_then_questions_merge_at_first_position() {
    let raw = r#"[
        {"precursor": "Shared", "questions": ["S1", "S2"]},
        {"precursor": "Other", "questions": ["O1"]},
        {"precursor": "Shared", "questions": ["S3"]}
    ]"#;

    let groups = normalize_question_groups(raw).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].precursor.as_deref(), Some("Shared"));
    assert_eq!(groups[0].questions, vec!["S1", "S2", "S3"]);
    assert_eq!(groups[1].precursor.as_deref(), Some("Other"));
}

#[test]
fn given_null_absent_and_empty_precursors_when_normalizing_then_single_standalone_group() {
    let raw = r#"[
        {"precursor": null, "questions": ["N1"]},
        {"precursor": "Passage", "questions": ["P1"]},
        {"questions": ["N2"]},
        {"precursor": "", "questions": ["N3"]}
    ]"#;

    let groups = normalize_question_groups(raw).unwrap();

    assert_eq!(
        groups,
        vec![
            QuestionGroup::with_questions(None, ["N1", "N2", "N3"]),
            QuestionGroup::with_questions(Some("Passage"), ["P1"]),
        ]
    );
}

#[test]
fn given_fenced_and_unfenced_payloads_when_normalizing_then_results_match() {
    let bare = r#"[{"precursor": "Read this.", "questions": ["Q1", "Q2"]}, {"precursor": null, "questions": ["Q3"]}]"#;
    let fenced = format!("Sure, here are the questions:\n```json\n{bare}\n```\nLet me know!");

    assert_eq!(
        normalize_question_groups(&fenced).unwrap(),
        normalize_question_groups(bare).unwrap()
    );
}

#[test]
fn given_generic_fence_when_normalizing_then_payload_is_parsed() {
    let raw = "```\n[{\"precursor\": null, \"questions\": [\"Q\"]}]\n```";

    let groups = normalize_question_groups(raw).unwrap();

    assert_eq!(groups, vec![QuestionGroup::with_questions(None, ["Q"])]);
}

#[test]
fn given_jsonc_labelled_fence_when_normalizing_then_payload_is_parsed() {
    let raw = "```jsonc\n[{\"precursor\": \"Map\", \"questions\": [\"Q1\"]}]\n```";

    let groups = normalize_question_groups(raw).unwrap();

    assert_eq!(groups, vec![QuestionGroup::with_questions(Some("Map"), ["Q1"])]);
}

#[test]
fn given_truncated_array_when_normalizing_then_returns_invalid_json() {
    let raw = r#"[{"precursor": "Passage", "questions": ["Q1""#;

    let result = normalize_question_groups(raw);

    assert!(matches!(result, Err(NormalizeError::InvalidJson(_))));
}

#[test]
fn given_prose_refusal_when_normalizing_then_returns_invalid_json() {
    let result = normalize_question_groups("I could not find any questions in this document.");

    assert!(matches!(result, Err(NormalizeError::InvalidJson(_))));
}

#[test]
fn given_top_level_object_when_normalizing_then_returns_not_an_array() {
    let result = normalize_question_groups(r#"{"questions": ["Q1"]}"#);

    assert!(matches!(result, Err(NormalizeError::NotAnArray(_))));
}

#[test]
fn given_non_object_entries_when_normalizing_then_they_are_skipped() {
    let raw = r#"["stray", 4, {"precursor": "P", "questions": ["Q"]}]"#;

    let groups = normalize_question_groups(raw).unwrap();

    assert_eq!(groups, vec![QuestionGroup::with_questions(Some("P"), ["Q"])]);
}

#[test]
fn given_reference_example_when_normalizing_then_matches_expected_output() {
    let raw = r#"[{"precursor":"Read the passage.","questions":["Q1"]},{"precursor":"Read the passage.","questions":["Q2"]},{"precursor":null,"questions":["Q3"]}]"#;

    let groups = normalize_question_groups(raw).unwrap();

    let serialized = serde_json::to_string(&groups).unwrap();
    assert_eq!(
        serialized,
        r#"[{"precursor":"Read the passage.","questions":["Q1","Q2"]},{"precursor":null,"questions":["Q3"]}]"#
    );
}

#[test]
fn given_empty_array_when_normalizing_then_no_groups() {
    assert!(normalize_question_groups("[]").unwrap().is_empty());
}
