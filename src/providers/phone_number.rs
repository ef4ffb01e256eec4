//! Phone number generation.

use fakeforge_core::{FakeValues, ForgeError, Registry};

pub(crate) const CATEGORY: &str = "phone_number";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "phoneNumber", phone_number);
    registry.register(CATEGORY, "cellPhone", cell_phone);
}

pub(crate) fn phone_number(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let format = values.fetch("phone_number.formats")?;
    Ok(values.numerify(&format))
}

pub(crate) fn cell_phone(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let format = values.fetch("phone_number.cell_formats")?;
    Ok(values.numerify(&format))
}

/// Phone number operations.
pub struct PhoneNumber<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> PhoneNumber<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    /// A number in one of the locale's landline formats.
    pub fn phone_number(&mut self) -> Result<String, ForgeError> {
        phone_number(self.values, self.registry)
    }

    /// A number in one of the locale's mobile formats.
    pub fn cell_phone(&mut self) -> Result<String, ForgeError> {
        cell_phone(self.values, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    #[test]
    fn test_phone_numbers_fill_every_digit() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let number = faker.phone_number().phone_number().unwrap();
            assert!(!number.contains('#'));
            assert!(number.chars().filter(char::is_ascii_digit).count() >= 10);
        }
    }

    #[test]
    fn test_german_cell_numbers_keep_their_dial_prefix() {
        let mut faker = Faker::with_locale("de").unwrap().with_seed(42);

        for _ in 0..10 {
            let number = faker.phone_number().cell_phone().unwrap();
            assert!(number.starts_with("01"));
            assert!(!number.contains('#'));
        }
    }
}
