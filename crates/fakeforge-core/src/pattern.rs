//! Wildcard pattern expansion.
//!
//! Supports two single-character wildcards:
//! - `#` - random digit 0-9 (via [`numerify`])
//! - `?` - random lowercase letter a-z (via [`letterify`])
//!
//! Each wildcard is drawn independently, left to right. All other characters
//! pass through verbatim, so output length always equals input length.

use crate::random::RandomService;

/// Replace each `#` in the input with a random digit.
pub fn numerify(random: &mut RandomService, input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '#' {
            result.push(random.next_digit());
        } else {
            result.push(c);
        }
    }
    result
}

/// Replace each `?` in the input with a random lowercase letter.
pub fn letterify(random: &mut RandomService, input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '?' {
            result.push(random.next_letter());
        } else {
            result.push(c);
        }
    }
    result
}

/// Replace `#` wildcards with digits and `?` wildcards with letters.
///
/// Digits are expanded first. Letterify never emits `#` and numerify never
/// emits `?`, so mixed patterns expand unambiguously.
pub fn bothify(random: &mut RandomService, input: &str) -> String {
    let numerified = numerify(random, input);
    letterify(random, &numerified)
}
