// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2025, under GPLv3 only.

// This crate contains useful utility functions that can be used throughout the codebase.

/// Exists to allow us to define custom trait operations on `i64`.
type CustomInt64 = i64;

/// This trait exists to allow us to pick individual base-10 digits out of an
/// instruction word, which is how parameter modes are encoded.
pub trait DecimalDigits {

    /// This function should return the base-10 digit at the given position of
    /// the absolute value, with 0 being the units digit. Positions beyond the
    /// most significant digit yield 0.
    fn decimal_digit(self, position: u32) -> u8;
}

impl DecimalDigits for CustomInt64 {

    /// Extracts the requested digit, treating negative words by magnitude.
    #[inline(always)]
    fn decimal_digit(self, position: u32) -> u8 {

        // 10^19 overflows u64, and i64 has no 20th digit anyway.
        match 10_u64.checked_pow(position) {
            Some(divisor) => ((self.unsigned_abs() / divisor) % 10) as u8,
            None => 0,
        }
    }
}

/// Returns every ordering of the supplied values, generated with Heap's
/// algorithm. The first ordering is always the input order.
pub fn permutations<T: Clone>(values: &[T]) -> Vec<Vec<T>> {

    let mut working = values.to_vec();
    let mut counters = vec![0_usize; working.len()];
    let mut output = vec![working.clone()];

    let mut i = 1;
    while i < working.len() {
        if counters[i] < i {

            // Even positions swap with the first element, odd ones with the counter.
            if i % 2 == 0 {
                working.swap(0, i);
            } else {
                working.swap(counters[i], i);
            }
            output.push(working.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    output
}
