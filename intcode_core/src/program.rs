// SPDX-License-Identifier: GPL-3.0
// program.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::error::ProgramParseError;

/// Parses comma-separated base-10 integers into a boot program. Whitespace
/// around the text and around each value is ignored, so a trailing newline
/// is fine; an empty value is not.
pub fn parse_program(text: &str) -> Result<Vec<i64>, ProgramParseError> {

    text.trim()
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| ProgramParseError {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
