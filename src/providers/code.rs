//! Product code generation.
//!
//! The only dataset-free category: ISBNs are pure check-digit arithmetic
//! over random digits, so every locale shares them.

use fakeforge_core::{FakeValues, ForgeError, Registry};

pub(crate) const CATEGORY: &str = "code";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "isbn10", isbn10);
    registry.register(CATEGORY, "isbn13", isbn13);
}

/// Nine random digits plus an ISBN-10 check digit (`X` when the check
/// value is ten).
pub(crate) fn isbn10(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let random = values.random();
    let mut digits = [0u32; 9];
    for digit in digits.iter_mut() {
        *digit = random.next_usize(10) as u32;
    }

    // Weights run 10 down to 2; the check digit carries weight 1 and must
    // bring the weighted sum to 0 mod 11.
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| (10 - i as u32) * d)
        .sum();
    let check = (11 - sum % 11) % 11;

    let mut isbn = String::with_capacity(10);
    for digit in digits {
        isbn.push(char::from(b'0' + digit as u8));
    }
    if check == 10 {
        isbn.push('X');
    } else {
        isbn.push(char::from(b'0' + check as u8));
    }
    Ok(isbn)
}

/// A `978`-prefixed EAN with nine random digits and the alternating
/// 1/3-weighted mod-10 check digit.
pub(crate) fn isbn13(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let random = values.random();
    let mut isbn = String::with_capacity(13);
    isbn.push_str("978");
    for _ in 0..9 {
        isbn.push(random.next_digit());
    }

    let sum: u32 = isbn
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit
            } else {
                3 * digit
            }
        })
        .sum();
    let check = (10 - sum % 10) % 10;
    isbn.push(char::from(b'0' + check as u8));
    Ok(isbn)
}

/// Product code operations.
pub struct Code<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Code<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    /// A valid random ISBN-10.
    pub fn isbn10(&mut self) -> Result<String, ForgeError> {
        isbn10(self.values, self.registry)
    }

    /// A valid random ISBN-13.
    pub fn isbn13(&mut self) -> Result<String, ForgeError> {
        isbn13(self.values, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    fn isbn10_weighted_sum(isbn: &str) -> u32 {
        isbn.chars()
            .enumerate()
            .map(|(i, c)| {
                let value = if c == 'X' {
                    10
                } else {
                    c.to_digit(10).unwrap()
                };
                (10 - i as u32) * value
            })
            .sum()
    }

    fn ean13_weighted_sum(isbn: &str) -> u32 {
        isbn.chars()
            .enumerate()
            .map(|(i, c)| {
                let value = c.to_digit(10).unwrap();
                if i % 2 == 0 {
                    value
                } else {
                    3 * value
                }
            })
            .sum()
    }

    #[test]
    fn test_isbn10_check_digit_is_valid() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..50 {
            let isbn = faker.code().isbn10().unwrap();
            assert_eq!(isbn.len(), 10);
            assert_eq!(isbn10_weighted_sum(&isbn) % 11, 0, "invalid ISBN-10 {isbn}");
        }
    }

    #[test]
    fn test_isbn13_check_digit_is_valid() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..50 {
            let isbn = faker.code().isbn13().unwrap();
            assert_eq!(isbn.len(), 13);
            assert!(isbn.starts_with("978"));
            assert_eq!(ean13_weighted_sum(&isbn) % 10, 0, "invalid ISBN-13 {isbn}");
        }
    }
}
