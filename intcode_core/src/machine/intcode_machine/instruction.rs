// SPDX-License-Identifier: GPL-3.0
// instruction.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use intcode_utility::DecimalDigits;

use super::parameter::{Parameter, ParameterMode};
use crate::error::MachineError;
use crate::memory::Memory;

/// A fully decoded instruction. Each variant carries exactly the operands its
/// opcode consumes, so the operand count is implied by the variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Add { a: Parameter, b: Parameter, destination: Parameter },
    Multiply { a: Parameter, b: Parameter, destination: Parameter },
    Input { destination: Parameter },
    Output { value: Parameter },
    JumpIfTrue { condition: Parameter, target: Parameter },
    JumpIfFalse { condition: Parameter, target: Parameter },
    LessThan { a: Parameter, b: Parameter, destination: Parameter },
    Equals { a: Parameter, b: Parameter, destination: Parameter },
    AdjustRelativeBase { offset: Parameter },
    Halt,
}

impl Instruction {

    /// Decodes the instruction stored at `address`, fetching its operands from
    /// the following cells.
    pub fn decode(memory: &impl Memory, address: i64) -> Result<Self, MachineError> {

        let word = memory.read(address)?;
        let invalid = MachineError::InvalidOpcode { address, word };

        // Operand k takes its mode from decimal digit k + 2 of the word.
        let operand = |k: u32| -> Result<Parameter, MachineError> {
            let mode = ParameterMode::from_digit(word.decimal_digit(k + 2)).ok_or(invalid)?;
            let raw = memory.read(address.wrapping_add(k as i64 + 1))?;
            Ok(Parameter { mode, raw })
        };

        let instruction = match word % 100 {
            1 => Instruction::Add { a: operand(0)?, b: operand(1)?, destination: operand(2)? },
            2 => Instruction::Multiply { a: operand(0)?, b: operand(1)?, destination: operand(2)? },
            3 => Instruction::Input { destination: operand(0)? },
            4 => Instruction::Output { value: operand(0)? },
            5 => Instruction::JumpIfTrue { condition: operand(0)?, target: operand(1)? },
            6 => Instruction::JumpIfFalse { condition: operand(0)?, target: operand(1)? },
            7 => Instruction::LessThan { a: operand(0)?, b: operand(1)?, destination: operand(2)? },
            8 => Instruction::Equals { a: operand(0)?, b: operand(1)?, destination: operand(2)? },
            9 => Instruction::AdjustRelativeBase { offset: operand(0)? },
            99 => Instruction::Halt,
            _ => return Err(invalid),
        };

        Ok(instruction)
    }

    /// The number of memory cells the instruction occupies, opcode included.
    pub fn length(&self) -> i64 {
        match self {
            Instruction::Add { .. }
            | Instruction::Multiply { .. }
            | Instruction::LessThan { .. }
            | Instruction::Equals { .. } => 4,
            Instruction::JumpIfTrue { .. } | Instruction::JumpIfFalse { .. } => 3,
            Instruction::Input { .. }
            | Instruction::Output { .. }
            | Instruction::AdjustRelativeBase { .. } => 2,
            Instruction::Halt => 1,
        }
    }
}
