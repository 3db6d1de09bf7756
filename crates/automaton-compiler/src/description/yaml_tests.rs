use indoc::indoc;

use automaton_core::State;

use super::*;

fn states(values: &[i64]) -> Vec<State> {
    values.iter().copied().map(State::new).collect()
}

#[test]
fn parse_basic_description() {
    let yaml = indoc! {r#"
        states: 3
        initial: 1
        finalstates: [3]
        transitions:
          - input: "a"
            outputs: [2,3,1]
          - input: "b"
            outputs: [1,2,3]
    "#};

    let automaton = IntermediateAutomaton::from_yaml(yaml).unwrap();

    assert_eq!(
        automaton,
        IntermediateAutomaton {
            state_count: Some(3),
            start_state: Some(State::new(1)),
            accept_states: states(&[3]),
            transitions: vec![
                TransitionGroup::new("a", [2, 3, 1]),
                TransitionGroup::new("b", [1, 2, 3]),
            ],
        }
    );
}

#[test]
fn multi_character_input_expands_per_symbol() {
    let yaml = indoc! {r#"
        states: 3
        initial: 1
        finalstates: [3]
        transitions:
          - input: "ac"
            outputs: [2,3,1]
          - input: "b"
            outputs: [1,2,3]
    "#};

    let automaton = parse_description(yaml.as_bytes()).unwrap();

    assert_eq!(automaton.transitions[0].symbols, vec!['a', 'c']);
    assert_eq!(automaton.transitions[0].outputs, states(&[2, 3, 1]));
    assert_eq!(automaton.transitions[1].symbols, vec!['b']);
}

#[test]
fn input_expands_by_character_not_byte() {
    let yaml = indoc! {r#"
        states: 1
        initial: 1
        transitions:
          - input: "é→"
            outputs: [1]
    "#};

    let automaton = parse_description(yaml.as_bytes()).unwrap();
    assert_eq!(automaton.transitions[0].symbols, vec!['é', '→']);
}

#[test]
fn unterminated_string_is_malformed() {
    let yaml = indoc! {r#"
        states: 3
        initial: 1
        finalstates: [3]
        transitions:
          - input: "a"
            outputs: [2,3,1]
          - input: "b
            outputs: [1,2,3]
    "#};

    let err = parse_description(yaml.as_bytes()).unwrap_err();

    assert!(matches!(err, DescriptionError::Malformed(_)));
    assert!(err.to_string().starts_with("unmarshal automaton yaml: "));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn wrong_value_shape_is_malformed() {
    let err = parse_description(b"states: [1, 2]\n").unwrap_err();
    assert!(err.to_string().starts_with("unmarshal automaton yaml: "));

    let err = parse_description(b"finalstates: three\n").unwrap_err();
    assert!(matches!(err, DescriptionError::Malformed(_)));
}

#[test]
fn invalid_utf8_is_malformed() {
    let err = parse_description(b"states: 1\ninitial: \xff\xfe\n").unwrap_err();
    assert!(matches!(err, DescriptionError::Malformed(_)));
}

#[test]
fn missing_scalars_parse_as_absent() {
    let yaml = indoc! {r#"
        finalstates: [1]
        transitions:
          - input: "a"
            outputs: [1]
    "#};

    let automaton = parse_description(yaml.as_bytes()).unwrap();

    assert_eq!(automaton.state_count, None);
    assert_eq!(automaton.start_state, None);
    assert_eq!(automaton.accept_states, states(&[1]));
}

#[test]
fn null_lists_parse_as_empty() {
    let yaml = indoc! {"
        states: 2
        initial: 1
        finalstates: ~
        transitions:
          - input: ~
            outputs: ~
    "};

    let automaton = parse_description(yaml.as_bytes()).unwrap();

    assert!(automaton.accept_states.is_empty());
    assert_eq!(automaton.transitions, vec![TransitionGroup::default()]);
}

#[test]
fn out_of_range_values_are_kept_verbatim() {
    let yaml = indoc! {"
        states: -1
        initial: 165
        finalstates: [0, 3, 3]
        transitions:
          - input: ab
            outputs: [-2]
    "};

    let automaton = parse_description(yaml.as_bytes()).unwrap();

    assert_eq!(automaton.state_count, Some(-1));
    assert_eq!(automaton.start_state, Some(State::new(165)));
    assert_eq!(automaton.accept_states, states(&[0, 3, 3]));
    assert_eq!(automaton.transitions[0].outputs, states(&[-2]));
}

#[test]
fn unknown_keys_are_ignored() {
    let yaml = indoc! {"
        name: parity
        states: 1
        initial: 1
        transitions:
          - input: x
            outputs: [1]
            comment: self loop
    "};

    let automaton = parse_description(yaml.as_bytes()).unwrap();
    assert_eq!(automaton.transitions, vec![TransitionGroup::new("x", [1])]);
}

#[test]
fn block_style_lists() {
    let yaml = indoc! {"
        states: 2
        initial: 1
        finalstates:
          - 2
        transitions:
          - input: '0'
            outputs:
              - 1
              - 1
    "};

    let automaton = parse_description(yaml.as_bytes()).unwrap();
    assert_eq!(automaton.accept_states, states(&[2]));
    assert_eq!(automaton.transitions[0].symbols, vec!['0']);
    assert_eq!(automaton.transitions[0].outputs, states(&[1, 1]));
}

#[test]
fn unquoted_numeric_input_is_literal_text() {
    let yaml = indoc! {"
        states: 2
        initial: 1
        finalstates: [2]
        transitions:
          - input: 13579
            outputs: [2, 2]
          - input: 02468
            outputs: [1, 1]
    "};

    let automaton = parse_description(yaml.as_bytes()).unwrap();

    let alphabet: String = automaton
        .transitions
        .iter()
        .flat_map(|group| group.symbols.iter())
        .collect();
    assert_eq!(alphabet, "1357902468");
}

#[test]
fn sequence_input_is_malformed() {
    let yaml = indoc! {"
        states: 1
        initial: 1
        transitions:
          - input: [1, 2]
            outputs: [1]
    "};

    let err = parse_description(yaml.as_bytes()).unwrap_err();
    assert!(matches!(err, DescriptionError::Malformed(_)));
}
