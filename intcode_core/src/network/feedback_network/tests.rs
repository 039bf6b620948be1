// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::{MachineError, NetworkError};
use crate::machine::{Machine, State};
use crate::network::NetworkConfig;

use super::{best_phase_setting, FeedbackNetwork};

// Tests for the feedback network.

/// Loops until its counter at address 28 runs out.
const FEEDBACK_LOOP: [i64; 29] = [
    3, 26, 1001, 26, -4, 26, 3, 27, 1002, 27, 2, 27, 1, 27, 26, 27, 4, 27, 1001, 28, -1, 28,
    1005, 28, 6, 99, 0, 0, 5,
];

/// Reads its phase and one signal, outputs once and halts.
const SINGLE_PASS: [i64; 17] = [3, 15, 3, 16, 1002, 16, 10, 16, 1, 16, 15, 15, 4, 15, 99, 0, 0];

#[test]
fn feedback_loop_should_produce_final_thrust() {

    let mut network = FeedbackNetwork::new(&FEEDBACK_LOOP, &[9, 8, 7, 6, 5], NetworkConfig::default());

    assert_eq!(network.run(), Ok(139629729));
    assert!(network.machines().iter().all(|machine| machine.state() == State::Halted));
}

#[test]
fn longer_feedback_loop_should_produce_final_thrust() {

    let program = [
        3, 52, 1001, 52, -5, 52, 3, 53, 1, 52, 56, 54, 1007, 54, 5, 55, 1005, 55, 26, 1001, 54,
        -5, 54, 1105, 1, 12, 1, 53, 54, 53, 1008, 54, 0, 55, 1001, 55, 1, 55, 2, 53, 55, 53, 4,
        53, 1001, 56, -1, 56, 1005, 56, 6, 99, 0, 0, 0, 0, 10,
    ];
    let mut network = FeedbackNetwork::new(&program, &[9, 7, 8, 5, 6], NetworkConfig::default());

    assert_eq!(network.run(), Ok(18216));
}

#[test]
fn single_pass_chain_should_be_handled_by_the_same_schedule() {

    let mut network = FeedbackNetwork::new(&SINGLE_PASS, &[4, 3, 2, 1, 0], NetworkConfig::default());

    assert_eq!(network.run(), Ok(43210));
}

#[test]
fn machines_should_not_share_memory() {

    let mut network = FeedbackNetwork::new(&SINGLE_PASS, &[4, 3], NetworkConfig::default());
    network.run().unwrap();

    // Each machine stored its own phase at address 15 before adding to it.
    let machines = network.machines();
    assert_eq!(machines[0].outputs(), &[4]);
    assert_eq!(machines[1].outputs(), &[43]);
    assert_ne!(machines[0].memory_at(15), machines[1].memory_at(15));
}

#[test]
fn initial_signal_should_be_configurable() {

    let config = NetworkConfig {
        initial_signal: 5,
        ..NetworkConfig::default()
    };
    let mut network = FeedbackNetwork::new(&SINGLE_PASS, &[1], config);

    assert_eq!(network.run(), Ok(51));
}

#[test]
fn empty_network_should_fail() {

    let mut network = FeedbackNetwork::new(&SINGLE_PASS, &[], NetworkConfig::default());

    assert_eq!(network.run(), Err(NetworkError::EmptyNetwork));
}

#[test]
fn faulting_machine_should_be_reported_with_its_index() {

    // Each machine stores its phase in the slot it executes next, so the
    // first halts and the second hits an unknown opcode.
    let mut network = FeedbackNetwork::new(&[3, 2, 0], &[99, 42], NetworkConfig::default());

    assert_eq!(
        network.run(),
        Err(NetworkError::Machine {
            index: 1,
            source: MachineError::InvalidOpcode { address: 2, word: 42 },
        })
    );
    assert_eq!(network.machines()[0].fault(), None);
    assert_eq!(
        network.machines()[1].fault(),
        Some(MachineError::InvalidOpcode { address: 2, word: 42 })
    );
}

#[test]
fn machines_starved_of_input_should_deadlock() {

    // The first machine swallows phase and signal then halts silently, so the
    // second waits forever.
    let mut network = FeedbackNetwork::new(&[3, 0, 3, 0, 99], &[1, 2], NetworkConfig::default());

    assert_eq!(network.run(), Err(NetworkError::Deadlock));
}

#[test]
fn halting_without_output_should_fail() {

    let mut network = FeedbackNetwork::new(&[3, 0, 99], &[1, 2], NetworkConfig::default());

    assert_eq!(network.run(), Err(NetworkError::NoOutput));
}

#[test]
fn network_that_never_halts_should_hit_round_limit() {

    // Echoes every input forever.
    let config = NetworkConfig {
        max_rounds: 10,
        ..NetworkConfig::default()
    };
    let mut network = FeedbackNetwork::new(&[3, 0, 4, 0, 1105, 1, 0], &[1, 2], config);

    assert_eq!(network.run(), Err(NetworkError::RoundLimitExceeded { rounds: 10 }));
}

#[test]
fn step_limit_should_apply_to_every_machine() {

    let config = NetworkConfig {
        step_limit: Some(50),
        ..NetworkConfig::default()
    };
    let mut network = FeedbackNetwork::new(&[3, 0, 1105, 1, 2], &[0, 0], config);

    assert_eq!(
        network.run(),
        Err(NetworkError::Machine {
            index: 0,
            source: MachineError::StepLimitExceeded { limit: 50 },
        })
    );
}

#[test]
fn best_phase_setting_should_find_single_pass_maximum() {

    let output = best_phase_setting(&SINGLE_PASS, &[0, 1, 2, 3, 4], NetworkConfig::default());

    assert_eq!(output, Ok((vec![4, 3, 2, 1, 0], 43210)));
}

#[test]
fn best_phase_setting_should_find_feedback_maximum() {

    let output = best_phase_setting(&FEEDBACK_LOOP, &[5, 6, 7, 8, 9], NetworkConfig::default());

    assert_eq!(output, Ok((vec![9, 8, 7, 6, 5], 139629729)));
}
