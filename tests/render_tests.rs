use num_bigint::BigUint;
use unform::{parse, render_with_seed, total_permutations, RenderOptions};

fn render_survey(input: &str, seed: u64) -> String {
    let parsed = parse(input);
    assert!(parsed.issues.is_empty(), "{:?}", parsed.issues);
    render_with_seed(&parsed.survey, &RenderOptions::new("survey"), seed)
}

#[test]
fn test_scenario_a_static_text() {
    let input = "Text\tRequired\tHello world";
    let parsed = parse(input);
    assert_eq!(parsed.survey.len(), 1);
    assert_eq!(total_permutations(&parsed.survey), BigUint::from(1u8));

    let markup = render_survey(input, 42);
    assert!(markup.contains(r#"<input type="hidden" name="static0" value="Hello world">"#));
}

#[test]
fn test_scenario_b_required_single_choice() {
    let input = "Radio\tRequired\tPick one\tA\tone\tB\ttwo";
    let parsed = parse(input);
    assert_eq!(total_permutations(&parsed.survey), BigUint::from(2u8));

    let markup = render_survey(input, 42);
    assert_eq!(markup.matches(r#"type="radio" name="rd0""#).count(), 2);
    assert!(markup.contains("<legend>Pick one <b>(Required)</b></legend>"));
}

#[test]
fn test_scenario_c_optional_multi_choice() {
    let input = "Checkbox\t\tPick any\tA\tone\t and \tB\ttwo\t.";
    let parsed = parse(input);
    assert_eq!(total_permutations(&parsed.survey), BigUint::from(4u8));

    let markup = render_survey(input, 42);
    // Non-last option carries its connector; the last does not
    assert!(markup.contains(r#"value="one and ">A<br>"#));
    assert!(markup.contains(r#"value="two">B<br>"#));
}

#[test]
fn test_blocks_render_in_line_order() {
    let input = "Text\t\tfirst\nRadio\t\tT\ta\tx\nText\t\tlast";
    let markup = render_survey(input, 42);

    let first = markup.find("static0").unwrap();
    let group = markup.find("fieldset_rd1").unwrap();
    let last = markup.find("static2").unwrap();
    assert!(first < group && group < last);
}

#[test]
fn test_randomized_choices_stable_within_one_render() {
    let input = "Random Text\t\talpha\tbeta\tgamma\tdelta";
    let markup = render_survey(input, 3);

    // Exactly one hidden static field, resolved once
    assert_eq!(markup.matches(r#"name="static0""#).count(), 1);
}

#[test]
fn test_random_candidates_come_from_the_right_group() {
    let input = "Random Radio\t\tT\t\t\tfirst\tf1\tf2\t\t\tsecond\ts1\ts2";
    let markup = render_survey(input, 11);

    // Each option's value must come from its own candidate list
    for line in markup.lines().filter(|l| l.contains("type=\"radio\"")) {
        if line.ends_with("first<br>") || line.contains(">first<") {
            assert!(line.contains("value=\"f1\"") || line.contains("value=\"f2\""), "{}", line);
        }
        if line.contains(">second<") {
            assert!(line.contains("value=\"s1\"") || line.contains("value=\"s2\""), "{}", line);
        }
    }
}

#[test]
fn test_trailing_newlines_trimmed_from_values() {
    let markup = render_survey("Text\t\tkeep me", 1);
    assert!(!markup.contains("value=\"keep me\n\""));
}

#[test]
fn test_two_surveys_do_not_share_state() {
    // Same text parsed twice yields equal, independent results
    let input = "Radio\tRequired\tT\ta\tx";
    let first = parse(input);
    let second = parse(input);
    assert_eq!(first.survey, second.survey);
    assert_eq!(
        render_with_seed(&first.survey, &RenderOptions::new("s"), 5),
        render_with_seed(&second.survey, &RenderOptions::new("s"), 5)
    );
}
