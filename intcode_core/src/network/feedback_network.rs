// SPDX-License-Identifier: GPL-3.0
// feedback_network.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use intcode_utility::permutations;
use log::{debug, info};

use super::NetworkConfig;
use crate::error::NetworkError;
use crate::machine::{intcode_machine::IntcodeMachine, Machine, State};

/// This struct models a ring of machines in which machine i's output becomes
/// machine (i + 1) mod N's input. Machines are scheduled cooperatively on the
/// calling thread, one `run` at a time.
pub struct FeedbackNetwork<M: Machine> {

    // Participants, in ring order.
    machines: Vec<M>,

    config: NetworkConfig,
}

/// Implementation functions for networks of Intcode machines.
impl FeedbackNetwork<IntcodeMachine> {

    /// Creates one machine per phase, each booted from its own copy of
    /// `program` with its phase queued as the first input. The first machine
    /// is also given the configured initial signal.
    pub fn new(program: &[i64], phases: &[i64], config: NetworkConfig) -> Self {

        let machines = phases
            .iter()
            .enumerate()
            .map(|(index, &phase)| {
                let mut machine = IntcodeMachine::new(program, &[phase]);
                if index == 0 {
                    machine.feed(config.initial_signal);
                }
                match config.step_limit {
                    Some(limit) => machine.with_step_limit(limit),
                    None => machine,
                }
            })
            .collect();

        FeedbackNetwork::from_machines(machines, config)
    }
}

/// Implementation functions for the network itself.
impl<M: Machine> FeedbackNetwork<M> {

    /// Wraps machines that have already been constructed and primed.
    pub fn from_machines(machines: Vec<M>, config: NetworkConfig) -> Self {
        FeedbackNetwork {
            machines,
            config,
        }
    }

    /// Returns the participants, in ring order.
    pub fn machines(&self) -> &[M] {
        &self.machines
    }

    /// Runs every machine in turn, handing its new outputs to the next one,
    /// until all have halted. Returns the last value the last machine output.
    pub fn run(&mut self) -> Result<i64, NetworkError> {

        if self.machines.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }

        let count = self.machines.len();
        let mut last_output = None;

        for round in 0..self.config.max_rounds {

            let mut transferred = 0;
            for index in 0..count {

                let machine = &mut self.machines[index];
                machine
                    .run()
                    .map_err(|source| NetworkError::Machine { index, source })?;

                let pending = machine.take_pending_output();
                if index == count - 1 && !pending.is_empty() {
                    last_output = pending.last().copied();
                }

                transferred += pending.len();
                self.machines[(index + 1) % count].feed_all(&pending);
            }

            debug!("round {round}: {transferred} values transferred");

            if self.machines.iter().all(|machine| machine.state() == State::Halted) {
                info!("network of {count} halted after {} rounds", round + 1);
                return last_output.ok_or(NetworkError::NoOutput);
            }

            // Every live machine is now blocked, so with nothing in flight
            // none of them can ever resume.
            if transferred == 0 {
                return Err(NetworkError::Deadlock);
            }
        }

        Err(NetworkError::RoundLimitExceeded { rounds: self.config.max_rounds })
    }
}

/// Tries every ordering of `phase_values` and returns the ordering whose
/// network produces the largest final output, along with that output.
pub fn best_phase_setting(
    program: &[i64],
    phase_values: &[i64],
    config: NetworkConfig
) -> Result<(Vec<i64>, i64), NetworkError> {

    let mut best: Option<(Vec<i64>, i64)> = None;

    for phases in permutations(phase_values) {

        let output = FeedbackNetwork::new(program, &phases, config).run()?;
        debug!("phases {phases:?} -> {output}");

        if best.as_ref().is_none_or(|(_, best_output)| output > *best_output) {
            best = Some((phases, output));
        }
    }

    best.ok_or(NetworkError::EmptyNetwork)
}

#[cfg(test)]
mod tests;
