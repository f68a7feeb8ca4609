use unform::{parse, BlockKind, FieldRole, ParseIssue};

#[test]
fn test_mixed_survey_parses_every_kind() {
    let survey = [
        "Text\t\tDear neighbor,",
        "Random Text\t\tI hope this finds you well.\tGreetings!",
        "Radio\tRequired\tTopic\tpotholes\tthe potholes\tnoise\tthe noise",
        "Random Radio\t\tOpener\t\t\tsoft\tI wanted to mention\tIt occurred to me\t\t\tdirect\tFix",
        "Checkbox\t\tGripes\tparking\tthe parking\t and \ttrash\tthe trash\t.",
        "Random Checkbox\t\tSignoff\t\t\twarm\tWarmly\tYours\t,\t\t\tcold\tRegards\t.",
    ]
    .join("\n");

    let parsed = parse(&survey);
    assert!(parsed.issues.is_empty(), "{:?}", parsed.issues);
    assert_eq!(parsed.survey.len(), 6);

    let kinds: Vec<_> = parsed
        .survey
        .blocks()
        .iter()
        .map(|b| match &b.kind {
            BlockKind::StaticText { .. } => "static",
            BlockKind::RandomStaticText { .. } => "random_static",
            BlockKind::SingleChoice { .. } => "single",
            BlockKind::RandomizedSingleChoice { .. } => "random_single",
            BlockKind::MultiChoice { .. } => "multi",
            BlockKind::RandomizedMultiChoice { .. } => "random_multi",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "static",
            "random_static",
            "single",
            "random_single",
            "multi",
            "random_multi"
        ]
    );
}

#[test]
fn test_bad_lines_do_not_stop_parsing() {
    let survey = "Nonsense\t\tx\nText\t\tfirst\nRadio\t\tT\tdangling\nText\t\tsecond";
    let parsed = parse(survey);

    assert_eq!(parsed.issues.len(), 2);
    assert!(matches!(parsed.issues[0], ParseIssue::UnrecognizedKind { line: 0, .. }));
    assert!(matches!(parsed.issues[1], ParseIssue::LengthMismatch { line: 2, .. }));

    // Both good lines survive with their original indices
    assert_eq!(parsed.survey.len(), 2);
    assert!(parsed.survey.get(1).is_some());
    assert!(parsed.survey.get(3).is_some());
}

#[test]
fn test_line_indices_count_blank_lines() {
    let survey = "\nText\t\ta\n\n\nText\t\tb";
    let parsed = parse(survey);
    let lines: Vec<usize> = parsed.survey.blocks().iter().map(|b| b.line).collect();
    assert_eq!(lines, vec![1, 4]);
}

#[test]
fn test_aliases_match_canonical_names() {
    let short = parse("Radio\tRequired\tT\ta\tx");
    let legacy = parse("Dynamic Block\tRequired\tT\ta\tx");
    let canonical = parse("Single Choice\tRequired\tT\ta\tx");

    let kind = |p: &unform::Parsed| p.survey.blocks()[0].kind.clone();
    assert_eq!(kind(&short), kind(&legacy));
    assert_eq!(kind(&short), kind(&canonical));
}

#[test]
fn test_required_field_roles() {
    let survey = "Radio\tRequired\tT\ta\tx\nCheckbox\tRequired\tU\ta\tx\t.\nText\tRequired\thi";
    let parsed = parse(survey);
    let fields = parsed.survey.required_fields();

    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].role, FieldRole::Single);
    assert_eq!(fields[0].to_string(), "rd0");
    assert_eq!(fields[1].role, FieldRole::Multi);
    assert_eq!(fields[1].to_string(), "ck1");
    // A required static block still lands in the list under the single role
    assert_eq!(fields[2].to_string(), "rd2");
}

#[test]
fn test_error_strings_carry_kind_line_and_raw_text() {
    let parsed = parse("Text\nMystery Kind\t\tpayload");
    let messages: Vec<String> = parsed.issues.iter().map(ToString::to_string).collect();

    assert!(messages[0].contains("Text"));
    assert!(messages[0].contains("line 0"));
    assert!(messages[1].contains("Mystery Kind"));
    assert!(messages[1].contains("line 1"));
    assert!(messages[1].contains("payload"));
}
