// SPDX-License-Identifier: GPL-3.0
// machine.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::MachineError;

/// This module contains the default Intcode machine implementation.
pub mod intcode_machine;

/// The run state of a machine. A machine starts out `Running`, may suspend in
/// `WaitingForInput` any number of times, and ends in `Halted`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    WaitingForInput,
    Halted,
}

/// This trait provides an implementation-opaque way of driving a machine from
/// puzzle code or from a scheduler such as the feedback network.
pub trait Machine {

    /// Implementations must execute until the machine halts or blocks on an
    /// empty input queue, returning the resulting state.
    fn run(&mut self) -> Result<State, MachineError>;

    /// Implementations must append the value to the input queue.
    fn feed(&mut self, value: i64);

    /// Implementations must return the oldest output not yet taken.
    fn take_output(&mut self) -> Result<i64, MachineError>;

    /// Implementations must return every output produced so far, taken or not.
    fn outputs(&self) -> &[i64];

    /// Implementations must return the value held at `address`.
    fn memory_at(&self, address: i64) -> Result<i64, MachineError>;

    /// Implementations must return the current run state.
    fn state(&self) -> State;

    /// Implementations must return the failure that stopped the machine, if
    /// any. A faulted machine keeps the state it had when it failed, so this
    /// is the only way to tell it apart from one that can still run.
    fn fault(&self) -> Option<MachineError>;

    /// Appends several values to the input queue, in order.
    fn feed_all(&mut self, values: &[i64]) {
        for &value in values {
            self.feed(value);
        }
    }

    /// Takes every output not yet taken, oldest first.
    fn take_pending_output(&mut self) -> Vec<i64> {

        let mut pending = vec![];
        while let Ok(value) = self.take_output() {
            pending.push(value);
        }

        pending
    }
}
