// SPDX-License-Identifier: GPL-3.0
// network.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

/// This module contains the round-robin feedback network.
pub mod feedback_network;

/// Settings shared by every network run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {

    /// Scheduling rounds allowed before the network is declared stuck. One
    /// round runs every machine once.
    pub max_rounds: usize,

    /// The value handed to the first machine after its phase.
    pub initial_signal: i64,

    /// Optional per-run instruction ceiling applied to every machine.
    pub step_limit: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            max_rounds: 10_000,
            initial_signal: 0,
            step_limit: None,
        }
    }
}
