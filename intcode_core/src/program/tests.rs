// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::ProgramParseError;
use crate::machine::{intcode_machine::IntcodeMachine, Machine, State};

use super::parse_program;

#[test]
fn parse_should_accept_trailing_newline_and_spacing() {

    let output = parse_program("1,0, 0,0,99\n");

    assert_eq!(output, Ok(vec![1, 0, 0, 0, 99]));
}

#[test]
fn parse_should_accept_negative_and_64_bit_values() {

    let output = parse_program("109,-1,104,1125899906842624,99");

    assert_eq!(output, Ok(vec![109, -1, 104, 1125899906842624, 99]));
}

#[test]
fn parse_should_report_position_of_bad_token() {

    let output = parse_program("1,2,x3,4");

    assert_eq!(
        output,
        Err(ProgramParseError {
            position: 2,
            token: "x3".to_string(),
        })
    );
}

#[test]
fn parse_should_reject_empty_values() {

    assert!(parse_program("1,,2").is_err());
    assert!(parse_program("1,2,").is_err());
    assert!(parse_program("  \n").is_err());
}

#[test]
fn parsed_program_should_run() {

    let program = parse_program("1002,4,3,4,33\n").unwrap();
    let mut machine = IntcodeMachine::new(&program, &[]);

    assert_eq!(machine.run(), Ok(State::Halted));
    assert_eq!(machine.memory_at(4), Ok(99));
}
