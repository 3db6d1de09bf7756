use automaton_core::{Colors, State};

use crate::{TableBuilder, dump};

fn states(values: &[i64]) -> Vec<State> {
    values.iter().copied().map(State::new).collect()
}

#[test]
fn dump_small_automaton() {
    let mut builder = TableBuilder::new(3, State::new(1));
    builder
        .accept_state(State::new(3))
        .add_transition('a', &states(&[2, 3, 1]))
        .add_transition('b', &states(&[1, 2, 3]));
    let automaton = builder.build();

    insta::assert_snapshot!(dump(&automaton, Colors::OFF), @r"
    [automaton]
    states = 3
    start  = 1
    accept = 3

    [transitions]
         1  2  3
    'a'  2  3  1
    'b'  1  2  3
    ");
}

#[test]
fn dump_aligns_wide_columns() {
    let mut builder = TableBuilder::new(10, State::new(10));
    builder
        .accept_state(State::new(2))
        .accept_state(State::new(10))
        .add_transition('\n', &states(&[10, 1, 2, 3, 4, 5, 6, 7, 8, 9]))
        .add_transition('x', &states(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 10]));
    let automaton = builder.build();

    insta::assert_snapshot!(dump(&automaton, Colors::OFF), @r"
    [automaton]
    states = 10
    start  = 10
    accept = 2, 10

    [transitions]
           1   2   3   4   5   6   7   8   9  10
    '\n'  10   1   2   3   4   5   6   7   8   9
    'x'    1   1   1   1   1   1   1   1   1  10
    ");
}

#[test]
fn dump_without_accept_states_or_transitions() {
    let automaton = TableBuilder::new(1, State::new(1)).build();

    insta::assert_snapshot!(dump(&automaton, Colors::OFF), @r"
    [automaton]
    states = 1
    start  = 1
    accept = (none)

    [transitions]
    (none)
    ");
}

#[test]
fn dump_colors_symbols_and_headers() {
    let mut builder = TableBuilder::new(1, State::new(1));
    builder.add_transition('a', &states(&[1]));
    let automaton = builder.build();

    let out = dump(&automaton, Colors::ON);
    assert!(out.contains("\x1b[34m[automaton]\x1b[0m"));
    assert!(out.contains("\x1b[32m'a'\x1b[0m  1"));
}
