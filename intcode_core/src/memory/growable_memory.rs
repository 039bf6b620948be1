// SPDX-License-Identifier: GPL-3.0
// growable_memory.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::collections::BTreeMap;

use super::Memory;
use crate::error::MachineError;

/// Addresses below this are kept in the dense buffer; anything written above
/// it (and past the boot image) goes to the sparse map.
pub const DENSE_CELL_LIMIT: usize = 1 << 20;

/// This struct models a conceptually infinite memory of signed 64-bit cells,
/// backed by a buffer that grows to cover the highest low address written.
/// Far-away cells are stored sparsely so a single write to a huge address
/// never tries to allocate everything below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowableMemory {

    // The materialised cells, starting at address 0.
    cells: Vec<i64>,

    // Cells at or above DENSE_CELL_LIMIT, by index.
    sparse_cells: BTreeMap<usize, i64>,
}

/// Implementation functions for the memory itself.
impl GrowableMemory {

    /// Creates a new memory holding its own copy of the boot program.
    pub fn new(boot_program: &[i64]) -> Self {
        GrowableMemory {
            cells: boot_program.to_vec(),
            sparse_cells: BTreeMap::new(),
        }
    }

    /// Returns the dense cells, from address 0 upwards.
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    /// Returns the number of cells held in the sparse map.
    pub fn sparse_len(&self) -> usize {
        self.sparse_cells.len()
    }

    /// Converts an address to an index, rejecting negatives.
    fn index_for(address: i64) -> Result<usize, MachineError> {
        usize::try_from(address).map_err(|_| MachineError::NegativeAddress { address })
    }
}

/// Implementation functions to be called from anything that understands what
/// a Memory object is.
impl Memory for GrowableMemory {

    /// Reads a cell, with unwritten cells reading as 0.
    fn read(&self, address: i64) -> Result<i64, MachineError> {

        let index = Self::index_for(address)?;
        let value = match self.cells.get(index) {
            Some(&value) => value,
            None => self.sparse_cells.get(&index).copied().unwrap_or(0),
        };

        Ok(value)
    }

    /// Writes a cell, zero-filling the dense buffer up to it first if it is
    /// a low address, or storing it sparsely otherwise.
    fn write(&mut self, address: i64, value: i64) -> Result<(), MachineError> {

        let index = Self::index_for(address)?;
        if index < self.cells.len() {
            self.cells[index] = value;
        } else if index < DENSE_CELL_LIMIT {
            self.cells.resize(index + 1, 0);
            self.cells[index] = value;
        } else {
            self.sparse_cells.insert(index, value);
        }

        Ok(())
    }

    /// Returns the number of dense cells.
    fn len(&self) -> usize {
        self.cells.len()
    }
}
