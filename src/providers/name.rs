//! Personal name generation.

use fakeforge_core::{FakeValues, ForgeError, Registry};

pub(crate) const CATEGORY: &str = "name";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "firstName", first_name);
    registry.register(CATEGORY, "lastName", last_name);
    registry.register(CATEGORY, "prefix", prefix);
    registry.register(CATEGORY, "suffix", suffix);
    registry.register(CATEGORY, "name", name);
    registry.register(CATEGORY, "fullName", full_name);
}

pub(crate) fn first_name(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("name.first_name")
}

pub(crate) fn last_name(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("name.last_name")
}

pub(crate) fn prefix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("name.prefix")
}

pub(crate) fn suffix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("name.suffix")
}

pub(crate) fn name(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    values.resolve("name.name", CATEGORY, registry)
}

pub(crate) fn full_name(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    values.composite("name.formats.full_name", " ", CATEGORY, registry)
}

/// Personal name operations.
pub struct Name<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Name<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    /// A random given name.
    pub fn first_name(&mut self) -> Result<String, ForgeError> {
        first_name(self.values, self.registry)
    }

    /// A random family name.
    pub fn last_name(&mut self) -> Result<String, ForgeError> {
        last_name(self.values, self.registry)
    }

    /// A name prefix such as `Mr.` or `Dr.`.
    pub fn prefix(&mut self) -> Result<String, ForgeError> {
        prefix(self.values, self.registry)
    }

    /// A name suffix such as `Jr.` or `PhD`.
    pub fn suffix(&mut self) -> Result<String, ForgeError> {
        suffix(self.values, self.registry)
    }

    /// A given name and family name, from the locale's `name.name` template.
    pub fn name(&mut self) -> Result<String, ForgeError> {
        name(self.values, self.registry)
    }

    /// Prefix, given name, and family name, joined per the locale's
    /// `formats.full_name` list.
    pub fn full_name(&mut self) -> Result<String, ForgeError> {
        full_name(self.values, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    #[test]
    fn test_name_resolves_to_two_words() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let name = faker.name().name().unwrap();
            assert_eq!(name.split(' ').count(), 2);
            assert!(!name.contains("#{"));
        }
    }

    #[test]
    fn test_full_name_has_prefix_and_both_names() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let full = faker.name().full_name().unwrap();
        assert_eq!(full.split(' ').count(), 3);
    }

    #[test]
    fn test_part_draws_are_non_empty() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(7);

        assert!(!faker.name().first_name().unwrap().is_empty());
        assert!(!faker.name().last_name().unwrap().is_empty());
        assert!(!faker.name().prefix().unwrap().is_empty());
        assert!(!faker.name().suffix().unwrap().is_empty());
    }

    #[test]
    fn test_seeded_names_are_reproducible() {
        let mut a = Faker::with_locale("en").unwrap().with_seed(99);
        let mut b = Faker::with_locale("en").unwrap().with_seed(99);

        for _ in 0..10 {
            assert_eq!(a.name().full_name().unwrap(), b.name().full_name().unwrap());
        }
    }
}
