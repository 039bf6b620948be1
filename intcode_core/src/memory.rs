// SPDX-License-Identifier: GPL-3.0
// memory.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::MachineError;

/// This module contains the default growable memory implementation.
pub mod growable_memory;

/// This trait provides an implementation-opaque way of reading and writing
/// machine memory. Addresses are signed so that a bad operand can be reported
/// rather than silently wrapped.
pub trait Memory {

    /// Implementations must return 0 for any address never written, and fail
    /// for negative addresses.
    fn read(&self, address: i64) -> Result<i64, MachineError>;

    /// Implementations must make room for `address` if needed, and fail for
    /// negative addresses.
    fn write(&mut self, address: i64, value: i64) -> Result<(), MachineError>;

    /// Implementations must return the number of cells currently materialised.
    fn len(&self) -> usize;

    /// Returns true if no cells are materialised.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
