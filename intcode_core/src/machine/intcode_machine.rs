// SPDX-License-Identifier: GPL-3.0
// intcode_machine.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::collections::VecDeque;

use log::{debug, trace, warn};

use super::{Machine, State};
use crate::error::MachineError;
use crate::memory::{growable_memory::GrowableMemory, Memory};
use instruction::Instruction;
use parameter::Parameter;

/// This module contains the instruction decoder.
mod instruction;

/// This module contains parameter modes and operand resolution.
mod parameter;

/// This structure represents the complete state of one Intcode machine. Each
/// instance owns its memory and queues outright; machines only ever interact
/// by having their outputs fed to one another between runs.
#[derive(Clone, Debug)]
pub struct IntcodeMachine {

    // Memory, initialised from a private copy of the boot program.
    memory: GrowableMemory,

    // Register definitions.
    instruction_pointer: i64,
    relative_base: i64,

    // I/O channels. Outputs are kept in full, with a cursor marking the
    // oldest one not yet taken.
    input_queue: VecDeque<i64>,
    output_log: Vec<i64>,
    output_cursor: usize,

    // Run state, plus the failure that stopped the machine if there was one.
    state: State,
    fault: Option<MachineError>,

    // Optional ceiling on instructions executed by a single run.
    step_limit: Option<u64>,
}

/// Implementation functions for the Intcode machine itself.
impl IntcodeMachine {

    /// Creates a new machine booted from a copy of `program`, with
    /// `initial_inputs` already queued.
    pub fn new(program: &[i64], initial_inputs: &[i64]) -> Self {
        IntcodeMachine {

            // Setup memory.
            memory: GrowableMemory::new(program),

            // Setup registers.
            instruction_pointer: 0,
            relative_base: 0,

            // Setup I/O channels.
            input_queue: initial_inputs.iter().copied().collect(),
            output_log: vec![],
            output_cursor: 0,

            // Setup run state.
            state: State::Running,
            fault: None,

            step_limit: None,
        }
    }

    /// Sets a ceiling on the number of instructions a single call to `run`
    /// may execute before the machine is failed.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Returns the address of the next instruction.
    pub fn instruction_pointer(&self) -> i64 {
        self.instruction_pointer
    }

    /// Returns the current relative base.
    pub fn relative_base(&self) -> i64 {
        self.relative_base
    }

    /// Returns the machine's memory.
    pub fn memory(&self) -> &GrowableMemory {
        &self.memory
    }

    /// Resolves a read operand against this machine's memory.
    fn read(&self, parameter: Parameter) -> Result<i64, MachineError> {
        parameter.read(&self.memory, self.relative_base)
    }

    /// Resolves a destination operand and stores the value there.
    fn write(&mut self, destination: Parameter, value: i64) -> Result<(), MachineError> {

        let address = destination.write_address(self.relative_base, self.instruction_pointer)?;
        self.memory.write(address, value)
    }

    /// Fetches, decodes and executes one instruction.
    fn step(&mut self) -> Result<(), MachineError> {

        let address = self.instruction_pointer;
        let instruction = Instruction::decode(&self.memory, address)?;
        trace!("{address:>6}: {instruction:?}");

        // Where execution continues if the instruction does not jump.
        let next = address.wrapping_add(instruction.length());

        match instruction {
            Instruction::Add { a, b, destination } => {
                let value = self.read(a)?.wrapping_add(self.read(b)?);
                self.write(destination, value)?;
                self.instruction_pointer = next;
            },

            Instruction::Multiply { a, b, destination } => {
                let value = self.read(a)?.wrapping_mul(self.read(b)?);
                self.write(destination, value)?;
                self.instruction_pointer = next;
            },

            Instruction::Input { destination } => {

                // Resolve the destination first so a bad operand never
                // swallows an input value.
                let target = destination.write_address(self.relative_base, address)?;
                match self.input_queue.pop_front() {
                    Some(value) => {
                        self.memory.write(target, value)?;
                        self.instruction_pointer = next;
                    },
                    None => {
                        debug!("blocked on input at address {address}");
                        self.state = State::WaitingForInput;
                    },
                }
            },

            Instruction::Output { value } => {
                let value = self.read(value)?;
                self.output_log.push(value);
                self.instruction_pointer = next;
            },

            Instruction::JumpIfTrue { condition, target } => {
                self.instruction_pointer = if self.read(condition)? != 0 {
                    self.read(target)?
                } else {
                    next
                };
            },

            Instruction::JumpIfFalse { condition, target } => {
                self.instruction_pointer = if self.read(condition)? == 0 {
                    self.read(target)?
                } else {
                    next
                };
            },

            Instruction::LessThan { a, b, destination } => {
                let value = (self.read(a)? < self.read(b)?) as i64;
                self.write(destination, value)?;
                self.instruction_pointer = next;
            },

            Instruction::Equals { a, b, destination } => {
                let value = (self.read(a)? == self.read(b)?) as i64;
                self.write(destination, value)?;
                self.instruction_pointer = next;
            },

            Instruction::AdjustRelativeBase { offset } => {
                self.relative_base = self.relative_base.wrapping_add(self.read(offset)?);
                self.instruction_pointer = next;
            },

            Instruction::Halt => {
                debug!("halted at address {address}");
                self.state = State::Halted;
            },
        }

        Ok(())
    }

    /// Records a fatal failure so that it sticks to the machine.
    fn fail(&mut self, error: MachineError) -> MachineError {

        warn!("machine failed at address {}: {error}", self.instruction_pointer);
        self.fault = Some(error);
        error
    }
}

/// Implementation functions to be called from anything that understands what
/// a Machine object is.
impl Machine for IntcodeMachine {

    /// Runs until the machine halts, blocks on input, or fails.
    fn run(&mut self) -> Result<State, MachineError> {

        if let Some(error) = self.fault {
            return Err(error);
        }

        match self.state {
            State::Halted => return Ok(State::Halted),
            State::WaitingForInput if self.input_queue.is_empty() => {
                return Ok(State::WaitingForInput);
            },
            State::WaitingForInput => {
                debug!("resuming at address {}", self.instruction_pointer);
            },
            State::Running => {},
        }

        self.state = State::Running;
        let mut steps: u64 = 0;

        while self.state == State::Running {
            if let Some(limit) = self.step_limit {
                if steps >= limit {
                    return Err(self.fail(MachineError::StepLimitExceeded { limit }));
                }
            }

            if let Err(error) = self.step() {
                return Err(self.fail(error));
            }
            steps += 1;
        }

        Ok(self.state)
    }

    /// Queues one input value.
    fn feed(&mut self, value: i64) {
        self.input_queue.push_back(value);
    }

    /// Takes the oldest output not yet taken.
    fn take_output(&mut self) -> Result<i64, MachineError> {

        let value = self
            .output_log
            .get(self.output_cursor)
            .copied()
            .ok_or(MachineError::NoOutputAvailable)?;
        self.output_cursor += 1;

        Ok(value)
    }

    /// Returns the full output history.
    fn outputs(&self) -> &[i64] {
        &self.output_log
    }

    /// Reads memory on behalf of the caller.
    fn memory_at(&self, address: i64) -> Result<i64, MachineError> {
        self.memory.read(address)
    }

    /// Returns the current run state.
    fn state(&self) -> State {
        self.state
    }

    /// Returns the failure that stopped this machine, if any.
    fn fault(&self) -> Option<MachineError> {
        self.fault
    }
}
