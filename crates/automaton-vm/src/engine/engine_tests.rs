use indoc::indoc;

use automaton_compiler::encode_automaton;
use automaton_core::State;
use automaton_table::CompiledAutomaton;

use super::{Outcome, Recognizer, recognize};

const INTEGER_YAML: &str = include_str!("../../../automaton-compiler/testdata/integer.yaml");
const ODD_DIGIT_YAML: &str = include_str!("../../../automaton-compiler/testdata/odd_digit.yaml");

fn encode(yaml: &str) -> CompiledAutomaton {
    encode_automaton(yaml.as_bytes()).unwrap()
}

/// Three states in a cycle on `a`/`c`, `b` stays put; accepts state 3.
fn cycle() -> CompiledAutomaton {
    encode(indoc! {r#"
        states: 3
        initial: 1
        finalstates: [3]
        transitions:
          - input: "ac"
            outputs: [2,3,1]
          - input: "b"
            outputs: [1,2,3]
    "#})
}

#[test]
fn integer_literals() {
    let automaton = encode(INTEGER_YAML);

    let cases = [
        ("1234567890", true),
        ("+1234567890", true),
        ("-1234567890", true),
        ("--1234567890", false),
        ("1234567890-", false),
        ("987654,3210", false),
        ("abcdefg", false),
    ];

    for (word, expected) in cases {
        assert_eq!(recognize(&automaton, word), expected, "word: {word:?}");
    }
}

#[test]
fn odd_final_digit() {
    let automaton = encode(ODD_DIGIT_YAML);

    let cases = [
        ("1", true),
        ("2", false),
        ("22222286003", true),
        ("ab3391821", false),
        ("12345678909", true),
    ];

    for (word, expected) in cases {
        assert_eq!(recognize(&automaton, word), expected, "word: {word:?}");
    }
}

#[test]
fn unknown_symbol_fails_fast() {
    let automaton = encode(ODD_DIGIT_YAML);
    let recognizer = Recognizer::new(&automaton);

    assert_eq!(
        recognizer.execute("ab3391821"),
        Outcome::UnknownSymbol {
            position: 0,
            symbol: 'a',
            state: State::new(1),
        }
    );
    assert_eq!(
        recognizer.execute("13x5"),
        Outcome::UnknownSymbol {
            position: 2,
            symbol: 'x',
            state: State::new(2),
        }
    );
}

#[test]
fn unknown_symbol_rejects_regardless_of_state() {
    let automaton = cycle();

    // "aa" alone ends in the accept state; the trailing 'x' still rejects.
    assert!(recognize(&automaton, "aa"));
    assert!(!recognize(&automaton, "aax"));
    assert!(!recognize(&automaton, "x"));
}

#[test]
fn empty_word_depends_on_start_state() {
    let rejecting = cycle();
    assert!(!recognize(&rejecting, ""));
    assert_eq!(
        Recognizer::new(&rejecting).execute(""),
        Outcome::Rejected(State::new(1))
    );

    let accepting = encode(indoc! {"
        states: 2
        initial: 2
        finalstates: [2]
        transitions:
          - input: a
            outputs: [1, 1]
    "});
    assert!(recognize(&accepting, ""));
    assert!(!recognize(&accepting, "a"));
}

#[test]
fn start_state_selects_row_entry() {
    // Rows differ only in their first and last entries.
    let from_first = encode(indoc! {"
        states: 3
        initial: 1
        finalstates: [2]
        transitions:
          - input: a
            outputs: [2, 3, 3]
    "});
    let from_last = encode(indoc! {"
        states: 3
        initial: 3
        finalstates: [2]
        transitions:
          - input: a
            outputs: [3, 3, 2]
    "});

    assert_eq!(
        Recognizer::new(&from_first).execute("a"),
        Outcome::Accepted(State::new(2))
    );
    assert_eq!(
        Recognizer::new(&from_last).execute("a"),
        Outcome::Accepted(State::new(2))
    );
}

#[test]
fn expanded_symbols_behave_identically() {
    let automaton = cycle();

    for (left, right) in [("a", "c"), ("aa", "cc"), ("ab", "cb"), ("aab", "acb")] {
        assert_eq!(
            Recognizer::new(&automaton).execute(left),
            Recognizer::new(&automaton).execute(right),
            "{left:?} vs {right:?}"
        );
    }
}

#[test]
fn repeated_recognition_is_stable() {
    let automaton = encode(INTEGER_YAML);
    let recognizer = Recognizer::new(&automaton);

    for word in ["+42", "4-2", "", "abc"] {
        let first = recognizer.execute(word);
        for _ in 0..3 {
            assert_eq!(recognizer.execute(word), first);
        }
    }
}

#[test]
fn concurrent_recognition_shares_automaton() {
    let automaton = encode(INTEGER_YAML);
    let words = ["1234567890", "+1", "--1", "987654,3210", "", "-0"];
    let expected: Vec<bool> = words.iter().map(|w| recognize(&automaton, w)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    words
                        .iter()
                        .map(|w| recognize(&automaton, w))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn outcome_accessors() {
    let accepted = Outcome::Accepted(State::new(3));
    let rejected = Outcome::Rejected(State::new(1));
    let unknown = Outcome::UnknownSymbol {
        position: 4,
        symbol: ',',
        state: State::new(2),
    };

    assert!(accepted.is_accepted());
    assert!(!rejected.is_accepted());
    assert!(!unknown.is_accepted());

    assert_eq!(accepted.final_state(), Some(State::new(3)));
    assert_eq!(rejected.final_state(), Some(State::new(1)));
    assert_eq!(unknown.final_state(), None);
    assert_eq!(unknown.last_state(), State::new(2));
}
