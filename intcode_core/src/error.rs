// SPDX-License-Identifier: GPL-3.0
// error.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use thiserror::Error;

/// Failures that are fatal to a single machine. Once raised, the machine keeps
/// reporting the same failure from every later call to `run`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {

    /// The word at `address` does not carry a known opcode, or one of the
    /// parameter modes it uses is not a known mode.
    #[error("invalid instruction word {word} at address {address}")]
    InvalidOpcode { address: i64, word: i64 },

    /// An operand resolved to a negative memory address.
    #[error("negative memory address {address}")]
    NegativeAddress { address: i64 },

    /// The instruction at `address` used immediate mode for its destination.
    #[error("immediate mode used as write target by instruction at address {address}")]
    InvalidWriteMode { address: i64 },

    /// `take_output` was called with nothing buffered.
    #[error("no output available")]
    NoOutputAvailable,

    /// A single `run` executed more instructions than the configured ceiling.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// Failure raised while parsing comma-separated program text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid program value {token:?} at position {position}")]
pub struct ProgramParseError {
    pub position: usize,
    pub token: String,
}

/// Failures raised while scheduling a feedback network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {

    /// A network needs at least one machine.
    #[error("network has no machines")]
    EmptyNetwork,

    /// One of the participants faulted.
    #[error("machine {index} failed: {source}")]
    Machine {
        index: usize,
        #[source]
        source: MachineError,
    },

    /// Every machine still running is waiting on input nobody will send.
    #[error("network deadlocked: all live machines are waiting for input")]
    Deadlock,

    /// The round cap was reached before every machine halted.
    #[error("network did not halt within {rounds} rounds")]
    RoundLimitExceeded { rounds: usize },

    /// The last machine halted without ever producing output.
    #[error("last machine produced no output")]
    NoOutput,
}
