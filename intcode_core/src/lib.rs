// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// Crate-wide lines to disable specific lints:

// Constructors take the boot program, so there is no sensible Default for
// most types here.
#![allow(clippy::new_without_default)]

/// This module contains the typed failures raised by machines, networks and
/// the program parser.
pub mod error;

/// This module contains the growable memory backing each machine.
pub mod memory;

/// This module contains Intcode machine related functionality.
pub mod machine;

/// This module contains the feedback network that wires machines into a loop.
pub mod network;

/// This module contains the parser for comma-separated program text.
pub mod program;
