// SPDX-License-Identifier: GPL-3.0
// parameter.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::MachineError;
use crate::memory::Memory;

/// This enum represents the addressing mode of a single operand.
/// Digit codes are listed explicitly for clarity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ParameterMode {
    Position = 0,
    Immediate = 1,
    Relative = 2,
}

impl ParameterMode {

    /// Maps a mode digit from an instruction word onto a mode.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(ParameterMode::Position),
            1 => Some(ParameterMode::Immediate),
            2 => Some(ParameterMode::Relative),
            _ => None,
        }
    }
}

/// An operand as fetched from memory, before resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub mode: ParameterMode,
    pub raw: i64,
}

impl Parameter {

    /// Resolves the operand to the value it denotes.
    pub fn read(&self, memory: &impl Memory, relative_base: i64) -> Result<i64, MachineError> {

        match self.mode {
            ParameterMode::Position => memory.read(self.raw),
            ParameterMode::Immediate => Ok(self.raw),
            ParameterMode::Relative => memory.read(relative_base.wrapping_add(self.raw)),
        }
    }

    /// Resolves the operand to the address it designates as a destination.
    /// `instruction_address` is only used for error reporting.
    pub fn write_address(
        &self,
        relative_base: i64,
        instruction_address: i64
    ) -> Result<i64, MachineError> {

        let address = match self.mode {
            ParameterMode::Position => self.raw,
            ParameterMode::Relative => relative_base.wrapping_add(self.raw),
            ParameterMode::Immediate => {
                return Err(MachineError::InvalidWriteMode { address: instruction_address });
            },
        };

        if address < 0 {
            return Err(MachineError::NegativeAddress { address });
        }

        Ok(address)
    }
}
